// Query validation
//
// This module turns raw user input into validated queries, or into structured
// rejections carrying user-facing messages.

pub mod alphabet;
pub mod validator;

pub use alphabet::{Alphabet, RUSSIAN_LETTERS};
pub use validator::{
    normalize_sample, LengthInput, Query, QueryValidator, RawRequest, Rejection, Violation, ViolationKind,
};
