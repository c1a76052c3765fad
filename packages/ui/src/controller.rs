//! # Page controller
//!
//! Decides, for the page currently loaded, which API calls to make and what
//! to render. It owns no long-lived state of its own: every page load starts
//! from the session cookie and re-fetches from the API.
//!
//! ## Pages
//!
//! [`Page::from_pathname`] picks the page from the URL path: a path containing
//! the detail page name (`place.html`) is the detail page, one containing the
//! login page name is the login page, anything else is the listing.
//!
//! ## States
//!
//! | Page | States | Terminal |
//! |------|--------|----------|
//! | Listing | `Unauthenticated`, `Loading`, `Loaded`, `Failed` | all but `Loading` |
//! | Detail | `MissingId`, `Loading`, `Loaded`, `NotFound`, `LoadFailed` | all but `Loading` |
//!
//! ## Commands
//!
//! Input plumbing turns DOM events into [`Command`]s and hands them to
//! [`PageController::dispatch`], which answers with the [`Outcome`] the view
//! has to apply (navigate, alert, or re-filter).

use api::{ApiError, PlacesApi};
use store::{ClientConfig, CookieJar, Session};
use tracing::{debug, error, info};

use crate::filter::PriceFilter;
use crate::render::{self, PlaceCard, PlaceDetailsView};

/// Inline message for a detail page opened without an `id`.
pub const MISSING_ID_MESSAGE: &str = "Invalid or missing place ID.";
/// Inline message when the API answers the detail request with an error status.
pub const NOT_FOUND_MESSAGE: &str = "Place not found.";
/// Inline message when the detail request fails without a usable answer.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load place details.";

/// Which page the browser has loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Listing,
    Detail,
    Login,
}

impl Page {
    pub fn from_pathname(pathname: &str, config: &ClientConfig) -> Self {
        if pathname.contains(config.pages.detail.as_str()) {
            Self::Detail
        } else if pathname.contains(config.pages.login.as_str()) {
            Self::Login
        } else {
            Self::Listing
        }
    }
}

/// State of the listing page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListingState {
    /// No token: show the login link, fetch nothing.
    #[default]
    Unauthenticated,
    Loading,
    Loaded(Vec<PlaceCard>),
    /// The fetch failed; the list stays empty.
    Failed,
}

impl ListingState {
    pub fn shows_login_link(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }

    pub fn cards(&self) -> &[PlaceCard] {
        match self {
            Self::Loaded(cards) => cards,
            _ => &[],
        }
    }
}

/// What the listing page shows: its state plus the active price filter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingView {
    pub state: ListingState,
    pub filter: PriceFilter,
}

impl ListingView {
    pub fn new(state: ListingState) -> Self {
        Self {
            state,
            filter: PriceFilter::All,
        }
    }

    /// Take the result of a fetch. The filter goes back to `All`.
    pub fn finish_loading(&mut self, state: ListingState) {
        self.state = state;
        self.filter = PriceFilter::All;
    }

    /// Apply a dispatch outcome that concerns the listing.
    pub fn apply(&mut self, outcome: &Outcome) {
        if let Outcome::Refilter(filter) = outcome {
            self.filter = filter.clone();
        }
    }

    /// Every rendered card with whether the filter lets it show.
    pub fn visible_cards(&self) -> Vec<(PlaceCard, bool)> {
        self.state
            .cards()
            .iter()
            .map(|card| (card.clone(), self.filter.shows(&card.price)))
            .collect()
    }
}

/// State of the detail page.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    MissingId,
    Loading { id: String },
    Loaded(PlaceDetailsView),
    NotFound,
    LoadFailed,
}

impl DetailState {
    /// Identifier still waiting to be fetched.
    pub fn pending_id(&self) -> Option<&str> {
        match self {
            Self::Loading { id } => Some(id),
            _ => None,
        }
    }

    /// Inline message to show instead of the details, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::MissingId => Some(MISSING_ID_MESSAGE),
            Self::NotFound => Some(NOT_FOUND_MESSAGE),
            Self::LoadFailed => Some(LOAD_FAILED_MESSAGE),
            Self::Loading { .. } | Self::Loaded(_) => None,
        }
    }
}

/// User intent, decoupled from the DOM event that carried it.
#[derive(Clone, PartialEq)]
pub enum Command {
    LoginRequested { email: String, password: String },
    FilterChanged(String),
    ItemClicked(String),
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoginRequested { email, .. } => f
                .debug_struct("LoginRequested")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Self::FilterChanged(selection) => f.debug_tuple("FilterChanged").field(selection).finish(),
            Self::ItemClicked(id) => f.debug_tuple("ItemClicked").field(id).finish(),
        }
    }
}

/// What the view has to do after a command.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Full-page navigation to a relative URL.
    Navigate(String),
    /// Blocking alert; the page stays as it is.
    Alert(String),
    /// Re-apply visibility to the rendered cards.
    Refilter(PriceFilter),
}

/// Per-page entry logic over a session and an API.
#[derive(Clone, Debug)]
pub struct PageController<J: CookieJar, A: PlacesApi> {
    session: Session<J>,
    api: A,
    config: ClientConfig,
}

impl<J: CookieJar, A: PlacesApi> PageController<J, A> {
    pub fn new(session: Session<J>, api: A, config: ClientConfig) -> Self {
        Self {
            session,
            api,
            config,
        }
    }

    pub fn session(&self) -> &Session<J> {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn page(&self, pathname: &str) -> Page {
        Page::from_pathname(pathname, &self.config)
    }

    /// Listing state right after page load, before any request.
    pub fn initial_listing_state(&self) -> ListingState {
        let has_token = self.session.is_authenticated();
        debug!("Listing page loaded, token present: {has_token}");
        if has_token {
            ListingState::Loading
        } else {
            ListingState::Unauthenticated
        }
    }

    /// Fetch and render the listing. Without a token nothing is requested.
    pub async fn load_listing(&self) -> ListingState {
        let Some(token) = self.session.get_token() else {
            return ListingState::Unauthenticated;
        };

        match self.api.list_places(&token).await {
            Ok(places) => {
                debug!("Fetched places data: {places:?}");
                ListingState::Loaded(render::place_cards(&places, &self.config.pages.detail))
            }
            Err(e) => {
                error!("Failed to fetch places: {e}");
                ListingState::Failed
            }
        }
    }

    /// Detail state right after page load, from the page's full URL.
    pub fn initial_detail_state(&self, href: Option<&str>) -> DetailState {
        match href.and_then(place_id_from_href) {
            Some(id) => DetailState::Loading { id },
            None => DetailState::MissingId,
        }
    }

    /// Fetch and render one place. Non-OK answers are "not found", anything
    /// else that goes wrong is a load failure.
    pub async fn load_detail(&self, id: &str) -> DetailState {
        let token = self.session.get_token();
        match self.api.get_place(id, token.as_deref()).await {
            Ok(place) => {
                debug!("Fetched place details: {place:?}");
                DetailState::Loaded(render::place_details(&place))
            }
            Err(e @ ApiError::FetchFailed { .. }) => {
                error!("Response not OK: {e}");
                DetailState::NotFound
            }
            Err(e) => {
                error!("Error fetching place details: {e}");
                DetailState::LoadFailed
            }
        }
    }

    /// Handle a command and tell the view what to do next.
    pub async fn dispatch(&self, command: Command) -> Outcome {
        debug!("Dispatching {command:?}");
        match command {
            Command::LoginRequested { email, password } => self.login(&email, &password).await,
            Command::FilterChanged(selection) => {
                Outcome::Refilter(PriceFilter::from_selection(&selection))
            }
            Command::ItemClicked(id) => {
                Outcome::Navigate(render::detail_href(&self.config.pages.detail, &id))
            }
        }
    }

    async fn login(&self, email: &str, password: &str) -> Outcome {
        match self.api.login(email, password).await {
            Ok(token) => {
                self.session.set_token(&token);
                info!("Logged in as {email}");
                Outcome::Navigate(self.config.pages.listing.clone())
            }
            Err(e) => {
                error!("Login failed for {email}: {e}");
                Outcome::Alert(format!("Login failed: {}", e.reason()))
            }
        }
    }
}

/// The `id` query parameter of a full URL, if present and non-empty.
pub fn place_id_from_href(href: &str) -> Option<String> {
    let url = url::Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(name, _)| name == "id")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use api::Place;
    use store::MemoryCookieJar;

    use super::*;

    /// Requests seen by the fake API.
    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Login(String, String),
        ListPlaces(String),
        GetPlace(String, Option<String>),
    }

    #[derive(Clone, Default)]
    struct FakeApi {
        calls: Arc<Mutex<Vec<Call>>>,
        accepted: Option<(String, String, String)>,
        places: Option<Vec<Place>>,
        place: Option<Place>,
        place_error: Option<fn() -> ApiError>,
    }

    impl FakeApi {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl PlacesApi for FakeApi {
        async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
            self.record(Call::Login(email.to_string(), password.to_string()));
            match &self.accepted {
                Some((e, p, token)) if e == email && p == password => Ok(token.clone()),
                _ => Err(ApiError::LoginFailed {
                    status: 401,
                    status_text: "UNAUTHORIZED".to_string(),
                }),
            }
        }

        async fn list_places(&self, token: &str) -> Result<Vec<Place>, ApiError> {
            self.record(Call::ListPlaces(token.to_string()));
            self.places.clone().ok_or(ApiError::FetchFailed {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            })
        }

        async fn get_place(&self, id: &str, token: Option<&str>) -> Result<Place, ApiError> {
            self.record(Call::GetPlace(id.to_string(), token.map(str::to_string)));
            if let Some(make_error) = self.place_error {
                return Err(make_error());
            }
            self.place.clone().ok_or(ApiError::FetchFailed {
                status: 404,
                status_text: "Not Found".to_string(),
            })
        }
    }

    fn place(id: &str, title: &str, price: f64) -> Place {
        Place {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{title} description"),
            price,
            latitude: 10.5,
            longitude: -20.25,
        }
    }

    fn controller(jar: MemoryCookieJar, api: FakeApi) -> PageController<MemoryCookieJar, FakeApi> {
        PageController::new(Session::new(jar), api, ClientConfig::default())
    }

    fn logged_in(api: FakeApi) -> PageController<MemoryCookieJar, FakeApi> {
        controller(MemoryCookieJar::with_cookies("token=tok-1"), api)
    }

    #[test]
    fn test_page_from_pathname() {
        let config = ClientConfig::default();
        assert_eq!(Page::from_pathname("/index.html", &config), Page::Listing);
        assert_eq!(Page::from_pathname("/", &config), Page::Listing);
        assert_eq!(Page::from_pathname("/place.html", &config), Page::Detail);
        assert_eq!(Page::from_pathname("/part4/place.html", &config), Page::Detail);
        assert_eq!(Page::from_pathname("/login.html", &config), Page::Login);
    }

    #[test]
    fn test_place_id_from_href() {
        assert_eq!(
            place_id_from_href("http://localhost:5500/place.html?id=abc-123").as_deref(),
            Some("abc-123")
        );
        assert_eq!(
            place_id_from_href("http://localhost:5500/place.html?x=1&id=a+b%26c").as_deref(),
            Some("a b&c")
        );
        assert_eq!(place_id_from_href("http://localhost:5500/place.html"), None);
        assert_eq!(place_id_from_href("http://localhost:5500/place.html?id="), None);
        assert_eq!(place_id_from_href("not a url"), None);
    }

    #[tokio::test]
    async fn test_login_success_stores_token_and_navigates() {
        let api = FakeApi {
            accepted: Some(("jane@example.com".into(), "secret".into(), "tok-new".into())),
            ..Default::default()
        };
        let controller = controller(MemoryCookieJar::new(), api.clone());

        let outcome = controller
            .dispatch(Command::LoginRequested {
                email: "jane@example.com".into(),
                password: "secret".into(),
            })
            .await;

        assert_eq!(outcome, Outcome::Navigate("index.html".to_string()));
        assert_eq!(controller.session().get_token().as_deref(), Some("tok-new"));
        assert_eq!(
            api.calls(),
            [Call::Login("jane@example.com".into(), "secret".into())]
        );
    }

    #[tokio::test]
    async fn test_login_rejected_keeps_session() {
        let api = FakeApi::default();
        let controller = controller(MemoryCookieJar::with_cookies("token=old"), api);

        let outcome = controller
            .dispatch(Command::LoginRequested {
                email: "jane@example.com".into(),
                password: "wrong".into(),
            })
            .await;

        assert_eq!(outcome, Outcome::Alert("Login failed: UNAUTHORIZED".to_string()));
        assert_eq!(controller.session().get_token().as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn test_login_rejected_without_prior_token() {
        let controller = controller(MemoryCookieJar::new(), FakeApi::default());

        let outcome = controller
            .dispatch(Command::LoginRequested {
                email: "x@example.com".into(),
                password: "y".into(),
            })
            .await;

        assert!(matches!(outcome, Outcome::Alert(_)));
        assert_eq!(controller.session().get_token(), None);
    }

    #[tokio::test]
    async fn test_listing_without_token_fetches_nothing() {
        let api = FakeApi {
            places: Some(vec![place("1", "A", 10.0)]),
            ..Default::default()
        };
        let controller = controller(MemoryCookieJar::new(), api.clone());

        assert_eq!(controller.initial_listing_state(), ListingState::Unauthenticated);
        let state = controller.load_listing().await;
        assert_eq!(state, ListingState::Unauthenticated);
        assert!(state.shows_login_link());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_listing_with_empty_token_fetches_nothing() {
        let api = FakeApi {
            places: Some(vec![place("1", "A", 10.0)]),
            ..Default::default()
        };
        let controller = controller(MemoryCookieJar::with_cookies("token="), api.clone());

        assert_eq!(controller.initial_listing_state(), ListingState::Unauthenticated);
        let state = controller.load_listing().await;
        assert_eq!(state, ListingState::Unauthenticated);
        assert!(state.shows_login_link());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_listing_view_filters_loaded_cards() {
        let api = FakeApi {
            places: Some(vec![
                place("1", "Ten", 10.0),
                place("2", "Fifty", 50.0),
                place("3", "Hundred", 100.0),
            ]),
            ..Default::default()
        };
        let controller = logged_in(api);
        let mut view = ListingView::new(controller.initial_listing_state());
        assert!(view.visible_cards().is_empty());

        view.finish_loading(controller.load_listing().await);
        let visibility = |view: &ListingView| -> Vec<bool> {
            view.visible_cards().into_iter().map(|(_, visible)| visible).collect()
        };
        assert_eq!(visibility(&view), [true, true, true]);

        view.apply(&controller.dispatch(Command::FilterChanged("50".into())).await);
        assert_eq!(view.filter, PriceFilter::AtMost(50.0));
        assert_eq!(visibility(&view), [true, true, false]);

        view.apply(&controller.dispatch(Command::FilterChanged("10".into())).await);
        assert_eq!(visibility(&view), [true, false, false]);

        // A fresh fetch shows everything again.
        view.finish_loading(controller.load_listing().await);
        assert_eq!(view.filter, PriceFilter::All);
        assert_eq!(visibility(&view), [true, true, true]);
    }

    #[test]
    fn test_listing_view_ignores_other_outcomes() {
        let mut view = ListingView::default();
        view.apply(&Outcome::Refilter(PriceFilter::AtMost(10.0)));
        view.apply(&Outcome::Navigate("place.html?id=1".into()));
        view.apply(&Outcome::Alert("nope".into()));
        assert_eq!(view.filter, PriceFilter::AtMost(10.0));
    }

    #[tokio::test]
    async fn test_listing_renders_every_place_in_order() {
        let api = FakeApi {
            places: Some(vec![
                place("3", "Gamma", 300.0),
                place("1", "Alpha", 100.0),
                place("2", "Beta", 200.5),
            ]),
            ..Default::default()
        };
        let controller = logged_in(api.clone());

        assert_eq!(controller.initial_listing_state(), ListingState::Loading);
        let state = controller.load_listing().await;

        assert!(!state.shows_login_link());
        let cards = state.cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(
            cards.iter().map(|c| c.title.as_str()).collect::<Vec<_>>(),
            ["Gamma", "Alpha", "Beta"]
        );
        assert_eq!(cards[2].price, "Price: 200.5€");
        assert_eq!(cards[0].description, "Description: Gamma description");
        assert_eq!(cards[0].latitude, "Latitude: 10.5");
        assert_eq!(cards[0].longitude, "Longitude: -20.25");
        assert_eq!(api.calls(), [Call::ListPlaces("tok-1".into())]);
    }

    #[tokio::test]
    async fn test_listing_empty() {
        let api = FakeApi {
            places: Some(Vec::new()),
            ..Default::default()
        };
        let state = logged_in(api).load_listing().await;
        assert_eq!(state, ListingState::Loaded(Vec::new()));
        assert!(state.cards().is_empty());
    }

    #[tokio::test]
    async fn test_listing_failure_renders_nothing() {
        let state = logged_in(FakeApi::default()).load_listing().await;
        assert_eq!(state, ListingState::Failed);
        assert!(state.cards().is_empty());
        assert!(!state.shows_login_link());
    }

    #[tokio::test]
    async fn test_detail_missing_id_issues_no_request() {
        let api = FakeApi {
            place: Some(place("1", "A", 1.0)),
            ..Default::default()
        };
        let controller = logged_in(api.clone());

        let state = controller.initial_detail_state(Some("http://localhost/place.html"));
        assert_eq!(state, DetailState::MissingId);
        assert_eq!(state.message(), Some("Invalid or missing place ID."));
        assert_eq!(state.pending_id(), None);

        assert_eq!(controller.initial_detail_state(None), DetailState::MissingId);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_detail_loaded() {
        let api = FakeApi {
            place: Some(place("p-7", "Loft", 99.5)),
            ..Default::default()
        };
        let controller = logged_in(api.clone());

        let initial = controller.initial_detail_state(Some("http://localhost/place.html?id=p-7"));
        assert_eq!(initial.pending_id(), Some("p-7"));

        let state = controller.load_detail("p-7").await;
        let DetailState::Loaded(view) = state else {
            panic!("expected loaded state, got {state:?}");
        };
        assert_eq!(view.title, "Loft");
        assert_eq!(view.fields[1].value, "99.5€");
        assert_eq!(
            api.calls(),
            [Call::GetPlace("p-7".into(), Some("tok-1".into()))]
        );
    }

    #[tokio::test]
    async fn test_detail_without_token_still_requests() {
        let api = FakeApi {
            place: Some(place("p-7", "Loft", 99.5)),
            ..Default::default()
        };
        let controller = controller(MemoryCookieJar::new(), api.clone());

        let state = controller.load_detail("p-7").await;
        assert!(matches!(state, DetailState::Loaded(_)));
        assert_eq!(api.calls(), [Call::GetPlace("p-7".into(), None)]);
    }

    #[tokio::test]
    async fn test_detail_not_found() {
        let state = logged_in(FakeApi::default()).load_detail("nope").await;
        assert_eq!(state, DetailState::NotFound);
        assert_eq!(state.message(), Some("Place not found."));
    }

    #[tokio::test]
    async fn test_detail_network_failure() {
        let api = FakeApi {
            place_error: Some(|| ApiError::Network("connection refused".into())),
            ..Default::default()
        };
        let state = logged_in(api).load_detail("p-1").await;
        assert_eq!(state, DetailState::LoadFailed);
        assert_eq!(state.message(), Some("Failed to load place details."));
    }

    #[tokio::test]
    async fn test_item_clicked_navigates_to_detail() {
        let controller = logged_in(FakeApi::default());
        let outcome = controller.dispatch(Command::ItemClicked("p 1".into())).await;
        assert_eq!(outcome, Outcome::Navigate("place.html?id=p+1".to_string()));
    }

    #[tokio::test]
    async fn test_filter_changed() {
        let controller = logged_in(FakeApi::default());
        assert_eq!(
            controller.dispatch(Command::FilterChanged("All".into())).await,
            Outcome::Refilter(PriceFilter::All)
        );
        assert_eq!(
            controller.dispatch(Command::FilterChanged("50".into())).await,
            Outcome::Refilter(PriceFilter::AtMost(50.0))
        );
    }

    #[test]
    fn test_command_debug_hides_password() {
        let command = Command::LoginRequested {
            email: "jane@example.com".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{command:?}").contains("hunter2"));
    }
}
