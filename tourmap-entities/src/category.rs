use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PointCategory {
    Park,
    Beach,
    Museum,
    Monument,
    Viewpoint,
    #[default]
    Other,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EstablishmentCategory {
    Hotel,
    Pousada,
    Restaurant,
    Bar,
    Agency,
    Shop,
    #[default]
    Other,
}
