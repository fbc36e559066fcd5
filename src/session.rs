// The application session: one signed-in (or anonymous) user, the local
// mirror of the remote collections, the realtime sync machines and the two
// projections. The embedding UI owns exactly one of these and drives it
// with wall-clock timestamps.

use log::warn;

use tourmap_core::{
    collections::CollectionStore,
    entities::*,
    gateways::{
        auth::{AuthError, AuthGateway},
        geocode::GeoCodingGateway,
        image_upload::ImageUploadGateway,
        postal::PostalCodeGateway,
        realtime::RealtimeGateway,
    },
    projection::{
        list::{render_list, ListRendering},
        map::{MapProjection, Marker},
    },
    rating::RatingCache,
    repositories::{
        DirectoryRepo, EstablishmentRepo, EventRepo, PointRepo, ReviewRepo, SurveyRepo,
    },
    sync::{Delivery, RenderEffect, SyncManager},
    usecases,
    usecases::{
        CertificationChoice, CertificationResolution, EstablishmentChange, EventChange,
        NewEstablishment, NewEvent, NewPoint, NewReview, PendingEstablishment, PointChange,
        StoreEstablishmentOutcome, SurveyStatistics,
    },
};

use crate::cfg::Cfg;

pub use tourmap_core::filter::{FilterState, TypeFilter};
pub use tourmap_core::usecases::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Session {
    user: Option<SessionUser>,
    store: CollectionStore,
    ratings: RatingCache,
    sync: SyncManager,
    map: MapProjection,
    filter: FilterState,
    pending_establishment: PendingEstablishment,
}

impl Default for Session {
    fn default() -> Self {
        Self::visitor()
    }
}

impl Session {
    /// An anonymous session with the default cache and debounce windows.
    pub fn visitor() -> Self {
        Self::from_cfg(&Cfg::default())
    }

    pub fn from_cfg(cfg: &Cfg) -> Self {
        Self {
            user: None,
            store: CollectionStore::default(),
            ratings: RatingCache::new(cfg.rating_cache_ttl),
            sync: SyncManager::new(),
            map: MapProjection::new(cfg.map_debounce),
            filter: FilterState::default(),
            pending_establishment: PendingEstablishment::default(),
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    // ----------------------------------------------------------------
    // Authentication
    // ----------------------------------------------------------------

    pub fn sign_in(
        &mut self,
        auth: &dyn AuthGateway,
        email: &str,
        password: &str,
    ) -> std::result::Result<(), AuthError> {
        self.user = Some(auth.sign_in(email, password)?);
        Ok(())
    }

    pub fn sign_up(
        &mut self,
        auth: &dyn AuthGateway,
        email: &str,
        password: &str,
    ) -> std::result::Result<(), AuthError> {
        self.user = Some(auth.sign_up(email, password)?);
        Ok(())
    }

    /// The public data keeps streaming; only the identity and any half-done
    /// mutation state are dropped.
    pub fn sign_out(&mut self, auth: &dyn AuthGateway) {
        auth.sign_out();
        self.user = None;
        self.pending_establishment.clear();
    }

    // ----------------------------------------------------------------
    // Loading & realtime
    // ----------------------------------------------------------------

    /// One-shot load of all four collections, then (re-)subscribe to the
    /// push streams. Each collection fails soft: on error the previous
    /// local data is kept and a warning is logged.
    pub fn load_data<R: DirectoryRepo>(
        &mut self,
        repo: &R,
        realtime: &dyn RealtimeGateway,
        now: Timestamp,
        force_refresh: bool,
    ) {
        match repo.fetch_all_points(force_refresh) {
            Ok(points) => self.store.replace_points(points),
            Err(err) => warn!("Loading points failed: {err}"),
        }
        match repo.fetch_all_events(force_refresh) {
            Ok(events) => self.store.replace_events(events),
            Err(err) => warn!("Loading events failed: {err}"),
        }
        match repo.fetch_all_establishments(force_refresh) {
            Ok(establishments) => self.store.replace_establishments(establishments),
            Err(err) => warn!("Loading establishments failed: {err}"),
        }
        match repo.fetch_all_reviews(force_refresh) {
            Ok(reviews) => self.store.replace_reviews(reviews),
            Err(err) => warn!("Loading reviews failed: {err}"),
        }
        self.ratings.clear();
        self.map.request_render(now);
        self.sync.start(realtime);
    }

    /// Applies one push delivery and schedules whatever re-rendering it
    /// requires. The returned effect tells the UI whether to re-read the
    /// list.
    pub fn handle_delivery(&mut self, now: Timestamp, delivery: Delivery) -> RenderEffect {
        let effect = self
            .sync
            .handle_delivery(&mut self.store, &mut self.ratings, delivery);
        if effect.map {
            self.map.request_render(now);
        }
        if effect.popups {
            self.map
                .refresh_open_popups(now, &self.store, &mut self.ratings);
        }
        effect
    }

    pub fn handle_sync_error(
        &mut self,
        kind: tourmap_core::collections::CollectionKind,
        err: &anyhow::Error,
    ) {
        self.sync.handle_error(kind, err);
    }

    /// (Re-)subscribes all four push streams, tearing down any live
    /// subscriptions first.
    pub fn start_realtime(&mut self, realtime: &dyn RealtimeGateway) {
        self.sync.start(realtime);
    }

    pub fn stop_realtime(&mut self) {
        self.sync.stop();
    }

    /// Drives the debounced map rebuild. Returns whether the marker set
    /// changed on this tick.
    pub fn tick(&mut self, now: Timestamp) -> bool {
        self.map
            .tick(now, &self.store, &self.filter, &mut self.ratings)
    }

    // ----------------------------------------------------------------
    // Filtering & projections
    // ----------------------------------------------------------------

    pub fn set_type_filter(&mut self, now: Timestamp, type_filter: TypeFilter) {
        self.filter.type_filter = type_filter;
        self.map.request_render(now);
    }

    pub fn set_search_term(&mut self, now: Timestamp, raw: &str) {
        self.filter.set_search_term(raw);
        self.map.request_render(now);
    }

    pub fn set_establishment_category(
        &mut self,
        now: Timestamp,
        category: Option<EstablishmentCategory>,
    ) {
        self.filter.establishment_category = category;
        self.map.request_render(now);
    }

    /// Schedules a marker rebuild outside of the usual triggers, e.g. after
    /// a viewport change. Redundant requests coalesce in the debounce.
    pub fn request_map_render(&mut self, now: Timestamp) {
        self.map.request_render(now);
    }

    pub fn clear_ratings_cache(&mut self) {
        self.ratings.clear();
    }

    pub fn markers(&self) -> &[Marker] {
        self.map.markers()
    }

    pub fn items_list(&mut self, now: Timestamp) -> ListRendering {
        render_list(now, &self.store, &self.filter, &mut self.ratings)
    }

    pub fn open_popup(&mut self, now: Timestamp, item: &ItemRef) -> bool {
        self.map.open_popup(now, item, &self.store, &mut self.ratings)
    }

    pub fn close_popup(&mut self, item: &ItemRef) {
        self.map.close_popup(item);
    }

    pub fn average_rating(&mut self, now: Timestamp, kind: ItemKind, id: &Id) -> AvgRating {
        self.ratings.get(now, self.store.reviews(), kind, id)
    }

    /// Coordinates to center the map on, if the item is mappable.
    pub fn center_on(&self, kind: ItemKind, id: &Id) -> Option<MapPoint> {
        self.store.position_of(kind, id)
    }

    // ----------------------------------------------------------------
    // Address helpers
    // ----------------------------------------------------------------

    pub fn resolve_postal_code(&self, gateway: &dyn PostalCodeGateway, code: &str) -> Option<Address> {
        gateway.resolve_postal_code(code)
    }

    pub fn resolve_address(
        &self,
        gateway: &dyn GeoCodingGateway,
        address: &Address,
    ) -> Option<(f64, f64)> {
        gateway.resolve_address_lat_lng(address)
    }

    // ----------------------------------------------------------------
    // Mutations
    // ----------------------------------------------------------------

    pub fn create_point<R: PointRepo, G: ImageUploadGateway>(
        &mut self,
        repo: &R,
        uploader: &G,
        now: Timestamp,
        new: NewPoint,
    ) -> Result<Id> {
        let id = usecases::create_point(repo, uploader, &mut self.store, self.user.as_ref(), now, new)?;
        self.map.request_render(now);
        Ok(id)
    }

    pub fn update_point<R: PointRepo, G: ImageUploadGateway>(
        &mut self,
        repo: &R,
        uploader: &G,
        now: Timestamp,
        id: &Id,
        change: PointChange,
    ) -> Result<()> {
        usecases::update_point(
            repo,
            uploader,
            &mut self.store,
            self.user.as_ref(),
            now,
            id,
            change,
        )?;
        self.map.request_render(now);
        Ok(())
    }

    pub fn delete_point<R: PointRepo + ReviewRepo>(
        &mut self,
        repo: &R,
        now: Timestamp,
        id: &Id,
    ) -> Result<()> {
        usecases::delete_point(repo, &mut self.store, self.user.as_ref(), id)?;
        self.ratings.clear();
        self.map.request_render(now);
        Ok(())
    }

    pub fn create_event<R: EventRepo, G: ImageUploadGateway>(
        &mut self,
        repo: &R,
        uploader: &G,
        now: Timestamp,
        new: NewEvent,
    ) -> Result<Id> {
        let id = usecases::create_event(repo, uploader, &mut self.store, self.user.as_ref(), now, new)?;
        self.map.request_render(now);
        Ok(id)
    }

    pub fn update_event<R: EventRepo, G: ImageUploadGateway>(
        &mut self,
        repo: &R,
        uploader: &G,
        now: Timestamp,
        id: &Id,
        change: EventChange,
    ) -> Result<()> {
        usecases::update_event(
            repo,
            uploader,
            &mut self.store,
            self.user.as_ref(),
            now,
            id,
            change,
        )?;
        self.map.request_render(now);
        Ok(())
    }

    pub fn finalize_event<R: EventRepo>(&mut self, repo: &R, now: Timestamp, id: &Id) -> Result<()> {
        usecases::finalize_event(repo, &mut self.store, self.user.as_ref(), now, id)?;
        self.map.request_render(now);
        Ok(())
    }

    pub fn delete_event<R: EventRepo + ReviewRepo>(
        &mut self,
        repo: &R,
        now: Timestamp,
        id: &Id,
    ) -> Result<()> {
        usecases::delete_event(repo, &mut self.store, self.user.as_ref(), id)?;
        self.ratings.clear();
        self.map.request_render(now);
        Ok(())
    }

    pub fn create_establishment<R: EstablishmentRepo, G: ImageUploadGateway>(
        &mut self,
        repo: &R,
        uploader: &G,
        now: Timestamp,
        new: NewEstablishment,
    ) -> Result<StoreEstablishmentOutcome> {
        let outcome = usecases::create_establishment(
            repo,
            uploader,
            &mut self.store,
            &mut self.pending_establishment,
            self.user.as_ref(),
            now,
            new,
        )?;
        if matches!(outcome, StoreEstablishmentOutcome::Stored(_)) {
            self.map.request_render(now);
        }
        Ok(outcome)
    }

    pub fn resolve_certification_choice<R: EstablishmentRepo>(
        &mut self,
        repo: &R,
        now: Timestamp,
        choice: CertificationChoice,
    ) -> Result<CertificationResolution> {
        let resolution = usecases::resolve_certification_choice(
            repo,
            &mut self.store,
            &mut self.pending_establishment,
            choice,
        )?;
        if matches!(resolution, CertificationResolution::Stored(_)) {
            self.map.request_render(now);
        }
        Ok(resolution)
    }

    pub fn update_establishment<R: EstablishmentRepo, G: ImageUploadGateway>(
        &mut self,
        repo: &R,
        uploader: &G,
        now: Timestamp,
        id: &Id,
        change: EstablishmentChange,
    ) -> Result<()> {
        usecases::update_establishment(
            repo,
            uploader,
            &mut self.store,
            self.user.as_ref(),
            now,
            id,
            change,
        )?;
        self.map.request_render(now);
        Ok(())
    }

    pub fn delete_establishment<R: EstablishmentRepo + ReviewRepo>(
        &mut self,
        repo: &R,
        now: Timestamp,
        id: &Id,
    ) -> Result<()> {
        usecases::delete_establishment(repo, &mut self.store, self.user.as_ref(), id)?;
        self.ratings.clear();
        self.map.request_render(now);
        Ok(())
    }

    pub fn create_review<R: ReviewRepo>(
        &mut self,
        repo: &R,
        now: Timestamp,
        new: NewReview,
    ) -> Result<Id> {
        let id = usecases::create_review(repo, &mut self.store, self.user.as_ref(), now, new)?;
        // Cached averages are stale the moment a review lands.
        self.ratings.clear();
        self.map
            .refresh_open_popups(now, &self.store, &mut self.ratings);
        Ok(id)
    }

    pub fn submit_survey<R: SurveyRepo>(
        &mut self,
        repo: &R,
        now: Timestamp,
        response: SurveyResponse,
    ) -> Result<Option<Id>> {
        usecases::submit_survey(repo, self.user.as_ref(), now, response)
    }

    pub fn survey_statistics<R: SurveyRepo>(&self, repo: &R) -> Result<SurveyStatistics> {
        usecases::survey_statistics(repo, self.user.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use tourmap_core::{
        collections::CollectionKind,
        gateways::image_upload::{ImageFile, ImageUploadError},
        gateways::realtime::RealtimeSubscription,
        projection::list::EmptyReason,
        repositories::Error as RepoError,
        sync::SnapshotDelivery,
    };
    use tourmap_entities::builders::*;

    type RepoResult<T> = std::result::Result<T, RepoError>;

    fn t(ms: i64) -> Timestamp {
        Timestamp::from_milliseconds(ms)
    }

    #[derive(Debug, Default)]
    struct Backend {
        points: RefCell<Vec<PointOfInterest>>,
        events: RefCell<Vec<Event>>,
        establishments: RefCell<Vec<Establishment>>,
        reviews: RefCell<Vec<Review>>,
        surveys: RefCell<Vec<SurveyResponse>>,
        establishment_adds: Cell<usize>,
    }

    impl PointRepo for Backend {
        fn fetch_all_points(&self, _: bool) -> RepoResult<Vec<PointOfInterest>> {
            Ok(self.points.borrow().clone())
        }
        fn add_point(&self, point: &PointOfInterest) -> RepoResult<Id> {
            let mut stored = point.clone();
            stored.id = Id::new();
            let id = stored.id.clone();
            self.points.borrow_mut().push(stored);
            Ok(id)
        }
        fn update_point(&self, _: &PointOfInterest) -> RepoResult<()> {
            Ok(())
        }
        fn delete_point(&self, id: &Id) -> RepoResult<()> {
            self.points.borrow_mut().retain(|p| p.id != *id);
            Ok(())
        }
    }

    impl EventRepo for Backend {
        fn fetch_all_events(&self, _: bool) -> RepoResult<Vec<Event>> {
            Ok(self.events.borrow().clone())
        }
        fn add_event(&self, event: &Event) -> RepoResult<Id> {
            let mut stored = event.clone();
            stored.id = Id::new();
            let id = stored.id.clone();
            self.events.borrow_mut().push(stored);
            Ok(id)
        }
        fn update_event(&self, _: &Event) -> RepoResult<()> {
            Ok(())
        }
        fn delete_event(&self, id: &Id) -> RepoResult<()> {
            self.events.borrow_mut().retain(|e| e.id != *id);
            Ok(())
        }
    }

    impl EstablishmentRepo for Backend {
        fn fetch_all_establishments(&self, _: bool) -> RepoResult<Vec<Establishment>> {
            Ok(self.establishments.borrow().clone())
        }
        fn add_establishment(&self, establishment: &Establishment) -> RepoResult<Id> {
            self.establishment_adds.set(self.establishment_adds.get() + 1);
            let mut stored = establishment.clone();
            stored.id = Id::new();
            let id = stored.id.clone();
            self.establishments.borrow_mut().push(stored);
            Ok(id)
        }
        fn update_establishment(&self, _: &Establishment) -> RepoResult<()> {
            Ok(())
        }
        fn delete_establishment(&self, id: &Id) -> RepoResult<()> {
            self.establishments.borrow_mut().retain(|e| e.id != *id);
            Ok(())
        }
    }

    impl ReviewRepo for Backend {
        fn fetch_all_reviews(&self, _: bool) -> RepoResult<Vec<Review>> {
            Ok(self.reviews.borrow().clone())
        }
        fn add_review(&self, review: &Review) -> RepoResult<Id> {
            let mut stored = review.clone();
            stored.id = Id::new();
            let id = stored.id.clone();
            self.reviews.borrow_mut().push(stored);
            Ok(id)
        }
        fn delete_reviews_of_item(&self, kind: ItemKind, item_id: &Id) -> RepoResult<usize> {
            let mut reviews = self.reviews.borrow_mut();
            let before = reviews.len();
            reviews.retain(|r| !r.is_about(kind, item_id));
            Ok(before - reviews.len())
        }
    }

    impl SurveyRepo for Backend {
        fn add_survey_response(&self, response: &SurveyResponse) -> RepoResult<Id> {
            let mut stored = response.clone();
            stored.id = Id::new();
            let id = stored.id.clone();
            self.surveys.borrow_mut().push(stored);
            Ok(id)
        }
        fn fetch_all_survey_responses(&self) -> RepoResult<Vec<SurveyResponse>> {
            Ok(self.surveys.borrow().clone())
        }
    }

    #[derive(Debug, Default)]
    struct Uploader {
        fail_names: Vec<String>,
    }

    impl ImageUploadGateway for Uploader {
        fn upload_image(&self, file: &ImageFile) -> std::result::Result<Url, ImageUploadError> {
            if self.fail_names.contains(&file.file_name) {
                return Err(ImageUploadError::Api("host unavailable".into()));
            }
            Ok(format!("https://img.example/{}", file.file_name)
                .parse()
                .unwrap())
        }
    }

    #[derive(Debug)]
    struct Subscription;

    impl RealtimeSubscription for Subscription {
        fn cancel(&mut self) {}
    }

    #[derive(Debug, Default)]
    struct Realtime;

    impl RealtimeGateway for Realtime {
        fn subscribe(
            &self,
            _: CollectionKind,
        ) -> std::result::Result<Box<dyn RealtimeSubscription>, anyhow::Error> {
            Ok(Box::new(Subscription))
        }
    }

    #[derive(Debug)]
    struct Auth(Role);

    impl AuthGateway for Auth {
        fn sign_in(&self, email: &str, _: &str) -> std::result::Result<SessionUser, AuthError> {
            Ok(SessionUser {
                email: email.into(),
                role: self.0,
            })
        }
        fn sign_up(&self, email: &str, _: &str) -> std::result::Result<SessionUser, AuthError> {
            Ok(SessionUser {
                email: email.into(),
                role: self.0,
            })
        }
        fn sign_out(&self) {}
    }

    fn signed_in(role: Role) -> Session {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut session = Session::visitor();
        session
            .sign_in(&Auth(role), "user@example.com", "secret")
            .unwrap();
        session
    }

    fn jpeg(name: &str) -> ImageFile {
        ImageFile {
            file_name: name.into(),
            mime_type: "image/jpeg".into(),
            bytes: vec![0; 16],
        }
    }

    #[test]
    fn load_starts_realtime_and_renders_after_the_debounce() {
        let backend = Backend::default();
        backend
            .points
            .borrow_mut()
            .push(PointOfInterest::build().id("p1").name("Lagoa").finish());

        let mut session = Session::visitor();
        session.load_data(&backend, &Realtime, t(0), false);
        assert!(!session.tick(t(50)));
        assert!(session.tick(t(100)));
        assert_eq!(session.markers().len(), 1);
    }

    #[test]
    fn burst_of_deliveries_collapses_into_one_rebuild() {
        let mut session = Session::visitor();
        session.load_data(&Backend::default(), &Realtime, t(0), false);
        session.tick(t(100));

        let delivery = |ids: &[&str]| {
            Delivery::Points(SnapshotDelivery {
                docs: ids
                    .iter()
                    .map(|id| PointOfInterest::build().id(id).finish())
                    .collect(),
                changes: vec![tourmap_core::sync::DocChange::Added("x".into())],
            })
        };
        session.handle_delivery(t(200), delivery(&["a"]));
        session.handle_delivery(t(230), delivery(&["a", "b"]));
        assert!(!session.tick(t(300)));
        assert!(session.tick(t(330)));
        assert_eq!(session.markers().len(), 2);
        assert!(!session.tick(t(500)));
    }

    #[test]
    fn uncertified_establishment_results_in_exactly_one_add() {
        let backend = Backend::default();
        let mut session = signed_in(Role::Company);
        let new = NewEstablishment {
            name: "Pousada Nova".into(),
            category: EstablishmentCategory::Pousada,
            has_certification: false,
            ..Default::default()
        };
        let outcome = session
            .create_establishment(&backend, &Uploader::default(), t(0), new)
            .unwrap();
        assert_eq!(outcome, StoreEstablishmentOutcome::CertificationChoiceRequired);
        assert_eq!(backend.establishment_adds.get(), 0);

        let resolution = session
            .resolve_certification_choice(&backend, t(0), CertificationChoice::ProceedUncertified)
            .unwrap();
        assert!(matches!(resolution, CertificationResolution::Stored(_)));
        assert_eq!(backend.establishment_adds.get(), 1);
        assert_eq!(session.store().establishments().len(), 1);
    }

    #[test]
    fn partial_image_upload_keeps_the_record_with_one_url() {
        let backend = Backend::default();
        let uploader = Uploader {
            fail_names: vec!["broken.jpg".into()],
        };
        let mut session = signed_in(Role::Admin);
        let new = NewPoint {
            name: "Lagoa Maior".into(),
            images: vec![jpeg("ok.jpg"), jpeg("broken.jpg")],
            ..Default::default()
        };
        let id = session.create_point(&backend, &uploader, t(0), new).unwrap();
        let point = session.store().points().get(&id).expect("point");
        assert_eq!(point.images.len(), 1);
        assert_eq!(
            point.images.primary().map(|u| u.as_str()),
            Some("https://img.example/ok.jpg")
        );
    }

    #[test]
    fn deleting_a_point_resets_its_average() {
        let backend = Backend::default();
        let mut session = signed_in(Role::Admin);
        backend
            .points
            .borrow_mut()
            .push(PointOfInterest::build().id("p1").finish());
        backend.reviews.borrow_mut().push(
            Review::build()
                .id("r1")
                .about(ItemKind::Point, "p1")
                .rating(5)
                .finish(),
        );
        session.load_data(&backend, &Realtime, t(0), false);

        let id: Id = "p1".into();
        assert_eq!(
            session.average_rating(t(0), ItemKind::Point, &id),
            AvgRating::from(5.0)
        );

        session.delete_point(&backend, t(0), &id).unwrap();
        assert!(session.store().reviews().is_empty());
        // Cache was cleared together with the cascade.
        assert_eq!(
            session.average_rating(t(0), ItemKind::Point, &id),
            AvgRating::default()
        );
    }

    #[test]
    fn finalized_events_leave_the_projections_but_not_the_store() {
        let backend = Backend::default();
        let mut session = signed_in(Role::Admin);
        backend
            .events
            .borrow_mut()
            .push(Event::build().id("e1").name("Festival").finish());
        session.load_data(&backend, &Realtime, t(0), false);
        session.tick(t(100));
        assert_eq!(session.markers().len(), 1);

        session.finalize_event(&backend, t(200), &"e1".into()).unwrap();
        session.tick(t(300));
        assert!(session.markers().is_empty());
        assert!(matches!(
            session.items_list(t(300)),
            ListRendering::Empty(EmptyReason::NoItems)
        ));
        assert!(session.store().events().get(&"e1".into()).is_some());
    }

    #[test]
    fn search_filter_drives_both_projections() {
        let backend = Backend::default();
        backend.establishments.borrow_mut().extend([
            Establishment::build()
                .id("h1")
                .name("Hotel da Lagoa")
                .category(EstablishmentCategory::Hotel)
                .finish(),
            Establishment::build()
                .id("r1")
                .name("Restaurante Central")
                .category(EstablishmentCategory::Restaurant)
                .finish(),
        ]);
        let mut session = Session::visitor();
        session.load_data(&backend, &Realtime, t(0), false);
        session.set_type_filter(t(10), TypeFilter::Establishments);
        session.set_establishment_category(t(20), Some(EstablishmentCategory::Hotel));
        session.set_search_term(t(30), "  LAGOA ");
        session.tick(t(130));

        assert_eq!(session.markers().len(), 1);
        let ListRendering::Cards(cards) = session.items_list(t(130)) else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Hotel da Lagoa");
    }

    #[test]
    fn sign_out_drops_identity_and_pending_state() {
        let backend = Backend::default();
        let mut session = signed_in(Role::Company);
        session
            .create_establishment(
                &backend,
                &Uploader::default(),
                t(0),
                NewEstablishment {
                    name: "Pousada".into(),
                    ..Default::default()
                },
            )
            .unwrap();

        session.sign_out(&Auth(Role::Company));
        assert!(session.user().is_none());
        let result =
            session.resolve_certification_choice(&backend, t(0), CertificationChoice::ProceedUncertified);
        assert!(matches!(result, Err(Error::NoPendingEstablishment)));
    }
}
