//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The matched source text
///
/// # Example
///
/// ```
/// use lexscan::{MK_TOKEN, TokenKind};
///
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// assert_eq!(token.text, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            text: $text,
        }
    };
}
