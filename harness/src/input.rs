//! Turning command-line tokens into a validated [`Stack`].

use pancake_kernel::stack::Stack;

use crate::error::HarnessError;

/// Stack solved when no sizes are given, top first.
pub const DEFAULT_STACK: [i64; 6] = [4, 5, 1, 3, 2, 6];

/// Parse `tokens` (top of the stack first) into a validated stack.
///
/// No tokens means [`DEFAULT_STACK`].
///
/// # Errors
///
/// Returns [`HarnessError::ParseStack`] for the first token that is not an
/// integer, and [`HarnessError::InvalidStack`] if the sizes fail validation.
pub fn parse_stack<S: AsRef<str>>(tokens: &[S]) -> Result<Stack, HarnessError> {
    if tokens.is_empty() {
        return Ok(Stack::new(DEFAULT_STACK.to_vec())?);
    }
    let sizes = tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            token
                .trim()
                .parse::<i64>()
                .map_err(|_| HarnessError::ParseStack {
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Stack::new(sizes)?)
}
