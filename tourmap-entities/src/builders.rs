pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    establishment_builder::*, event_builder::*, point_builder::*, review_builder::*,
};

pub mod point_builder {
    use super::*;
    use crate::{category::*, geo::*, image::ImageList, point::*, time::*};

    #[derive(Debug)]
    pub struct PointOfInterestBuild {
        point: PointOfInterest,
    }

    impl PointOfInterestBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.point.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.point.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.point.description = desc.into();
            self
        }
        pub fn category(mut self, category: PointCategory) -> Self {
            self.point.category = category;
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.point.pos = MapPoint::try_from_lat_lng_deg(lat, lng);
            self
        }
        pub fn unmappable(mut self) -> Self {
            self.point.pos = None;
            self
        }
        pub fn images(mut self, urls: Vec<&str>) -> Self {
            self.point.images = urls
                .into_iter()
                .map(|u| u.parse().unwrap())
                .collect::<ImageList>();
            self
        }
        pub fn created_by(mut self, email: &str) -> Self {
            self.point.created_by = email.into();
            self
        }
        pub fn finish(self) -> PointOfInterest {
            self.point
        }
    }

    impl Builder for PointOfInterest {
        type Build = PointOfInterestBuild;
        fn build() -> Self::Build {
            Self::Build {
                point: PointOfInterest {
                    id: crate::id::Id::new(),
                    name: "".into(),
                    description: "".into(),
                    category: PointCategory::Other,
                    pos: MapPoint::try_from_lat_lng_deg(-20.7836, -51.7156),
                    address: None,
                    images: Default::default(),
                    created_by: "admin@example.com".into(),
                    created_at: Timestamp::now(),
                    updated_at: None,
                },
            }
        }
    }
}

pub mod event_builder {
    use super::*;
    use crate::{category::*, event::*, geo::*, time::*};
    use time::macros::{date, time};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.event.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.event.description = desc.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.event.pos = MapPoint::try_from_lat_lng_deg(lat, lng);
            self
        }
        pub fn unmappable(mut self) -> Self {
            self.event.pos = None;
            self
        }
        pub fn status(mut self, status: EventStatus) -> Self {
            self.event.status = status;
            self
        }
        pub fn time_of_day(mut self, time: ::time::Time) -> Self {
            self.event.time = time;
            self
        }
        pub fn created_by(mut self, email: &str) -> Self {
            self.event.created_by = email.into();
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> Self::Build {
            Self::Build {
                event: Event {
                    id: crate::id::Id::new(),
                    name: "".into(),
                    description: "".into(),
                    category: PointCategory::Other,
                    date: date!(2026 - 01 - 01),
                    time: time!(18:00),
                    status: EventStatus::Active,
                    pos: MapPoint::try_from_lat_lng_deg(-20.7836, -51.7156),
                    address: None,
                    images: Default::default(),
                    created_by: "company@example.com".into(),
                    created_at: Timestamp::now(),
                    updated_at: None,
                    finalized_at: None,
                    finalized_by: None,
                },
            }
        }
    }
}

pub mod establishment_builder {
    use super::*;
    use crate::{category::*, contact::Contact, establishment::*, geo::*, time::*};

    #[derive(Debug)]
    pub struct EstablishmentBuild {
        establishment: Establishment,
    }

    impl EstablishmentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.establishment.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.establishment.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.establishment.description = desc.into();
            self
        }
        pub fn category(mut self, category: EstablishmentCategory) -> Self {
            self.establishment.category = category;
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.establishment.pos = MapPoint::try_from_lat_lng_deg(lat, lng);
            self
        }
        pub fn unmappable(mut self) -> Self {
            self.establishment.pos = None;
            self
        }
        pub fn contact(mut self, contact: Contact) -> Self {
            self.establishment.contact = Some(contact);
            self
        }
        pub fn certified(mut self, number: &str) -> Self {
            self.establishment.certification = Certification {
                has_certification: true,
                number: Some(number.into()),
            };
            self
        }
        pub fn created_by(mut self, email: &str) -> Self {
            self.establishment.created_by = email.into();
            self
        }
        pub fn finish(self) -> Establishment {
            self.establishment
        }
    }

    impl Builder for Establishment {
        type Build = EstablishmentBuild;
        fn build() -> Self::Build {
            Self::Build {
                establishment: Establishment {
                    id: crate::id::Id::new(),
                    name: "".into(),
                    description: "".into(),
                    category: EstablishmentCategory::Other,
                    pos: MapPoint::try_from_lat_lng_deg(-20.7836, -51.7156),
                    address: None,
                    contact: None,
                    images: Default::default(),
                    certification: Default::default(),
                    created_by: "company@example.com".into(),
                    created_at: Timestamp::now(),
                    updated_at: None,
                },
            }
        }
    }
}

pub mod review_builder {
    use super::*;
    use crate::{item::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn about(mut self, kind: ItemKind, item_id: &str) -> Self {
            self.review.item_kind = kind;
            self.review.item_id = item_id.into();
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.review.rating = rating.try_into().unwrap();
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.review.comment = comment.into();
            self
        }
        pub fn created_by(mut self, email: &str) -> Self {
            self.review.created_by = email.into();
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> Self::Build {
            Self::Build {
                review: Review {
                    id: crate::id::Id::new(),
                    item_kind: ItemKind::Point,
                    item_id: crate::id::Id::new(),
                    rating: 5.try_into().unwrap(),
                    comment: "".into(),
                    created_by: "tourist@example.com".into(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
