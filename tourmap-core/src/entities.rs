pub use tourmap_entities::{
    address::*, category::*, contact::*, establishment::*, event::*, geo::*, id::*, image::*,
    item::*, point::*, review::*, survey::*, time::*, url::*, user::*,
};
