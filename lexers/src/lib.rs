mod scanner;
mod helpers;

pub use scanner::Scanner;

pub use helpers::is_arbitrary;
pub use helpers::is_delimiter;
pub use helpers::is_digit;
pub use helpers::is_separator;
pub use helpers::OPERATOR_CHARS;
