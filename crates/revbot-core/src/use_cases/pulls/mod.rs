pub(crate) mod create_pull_request;
pub(crate) mod list_pull_requests_by_reviewer;
pub(crate) mod merge_pull_request;
pub(crate) mod reassign_reviewer;

pub use create_pull_request::CreatePullRequestInterface;
pub use list_pull_requests_by_reviewer::ListPullRequestsByReviewerInterface;
pub use merge_pull_request::MergePullRequestInterface;
pub use reassign_reviewer::{ReassignReviewerInterface, ReassignedPullRequest};

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    create_pull_request::MockCreatePullRequestInterface,
    list_pull_requests_by_reviewer::MockListPullRequestsByReviewerInterface,
    merge_pull_request::MockMergePullRequestInterface,
    reassign_reviewer::MockReassignReviewerInterface,
};
