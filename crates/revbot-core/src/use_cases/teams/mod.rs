pub(crate) mod add_team;
pub(crate) mod get_team;
pub(crate) mod set_user_is_active;

pub use add_team::AddTeamInterface;
pub use get_team::GetTeamInterface;
pub use set_user_is_active::SetUserIsActiveInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    add_team::MockAddTeamInterface, get_team::MockGetTeamInterface,
    set_user_is_active::MockSetUserIsActiveInterface,
};
