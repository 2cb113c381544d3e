pub mod session;
pub mod topic;
