/// A named role and the permissions a new user with that role receives by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePreset {
    pub name: &'static str,
    pub permissions: &'static [&'static str],
}
