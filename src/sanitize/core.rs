/// Invisible code point inserted after `@` to break mention grammar.
pub const ZERO_WIDTH: char = '\u{200B}';

/// Broadcast triggers defused before the blanket `@` rule runs.
///
/// Rule order matters: these substrings are rewritten first, so the
/// blanket rule below only has to skip `@` characters that are already
/// followed by the zero-width code point.
const BROADCAST_TRIGGERS: [&str; 2] = ["@everyone", "@here"];

/// Flatten newlines and neutralize platform mention syntax.
///
/// Rules applied left-to-right: newlines become single spaces,
/// `@everyone`/`@here` gain a zero-width code point after the `@`, then
/// every remaining `@` not already defused gains one too. The guard on
/// the last rule makes the whole transform idempotent.
pub fn sanitize_message(raw: &str) -> String {
    let mut text = raw.replace('\n', " ");
    for trigger in BROADCAST_TRIGGERS {
        let defused = format!("@{}{}", ZERO_WIDTH, &trigger[1..]);
        text = text.replace(trigger, &defused);
    }
    defuse_remaining_mentions(&text)
}

fn defuse_remaining_mentions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '@' && chars.peek() != Some(&ZERO_WIDTH) {
            out.push(ZERO_WIDTH);
        }
    }
    out
}
