use std::str::FromStr;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub email : String,
    pub role  : Role,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Tourist = 0,
    Company = 1,
    Admin   = 2,
}

#[derive(Debug)]
pub struct RoleParseError;

impl FromStr for Role {
    type Err = RoleParseError;
    fn from_str(s: &str) -> Result<Role, Self::Err> {
        match &*s.to_lowercase() {
            "tourist" => Ok(Role::Tourist),
            "company" => Ok(Role::Company),
            "admin" => Ok(Role::Admin),
            _ => Err(RoleParseError),
        }
    }
}
