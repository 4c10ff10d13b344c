// Advisors: each reads a player and their analysis and produces one kind
// of guidance. They are independent of each other.

pub mod career;
pub mod tactical;
pub mod training;
pub mod transfer;
