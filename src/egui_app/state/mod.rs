use tokio::runtime::Handle;

use crate::egui_app::{
    ApiClient, AuthContext, CityDetail, Config, DebugCategory, DebugLogger, RegistrationForm, Route,
    Router,
};
use crate::shared::CityId;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub auth: AuthContext,
    pub router: Router,
    pub city_detail: CityDetail,
    pub registration: RegistrationForm,
    /// Text of the "open city" input on the city actions page
    pub city_id_input: String,
    pub debug_logger: DebugLogger,
    pub debug_view_expanded: bool,
    pub debug_filter_category: Option<DebugCategory>,
    last_route: Route,
}

impl AppState {
    pub fn new(config: Config, runtime: Handle) -> Self {
        let debug_logger = DebugLogger::new(1000);
        debug_logger.info(
            DebugCategory::Other,
            format!("AppState initialized against {}", config.server_url()),
        );

        let api = ApiClient::new(config.clone());
        let router = Router::default();
        let last_route = router.current();

        Self {
            city_detail: CityDetail::new(api.clone(), runtime.clone(), debug_logger.clone()),
            registration: RegistrationForm::new(api, runtime, debug_logger.clone()),
            config,
            auth: AuthContext::new(),
            router,
            city_id_input: String::new(),
            debug_logger,
            debug_view_expanded: false,
            debug_filter_category: None,
            last_route,
        }
    }

    /// Drain finished requests and react to route changes. Once per frame.
    pub fn tick(&mut self) {
        self.registration.poll(&mut self.auth, &mut self.router);

        let route = self.router.current();
        if route != self.last_route {
            self.debug_logger
                .debug(DebugCategory::Route, format!("{} -> {}", self.last_route, route));
            if route.city_id().is_none() {
                self.city_detail.reset();
            }
            self.last_route = route;
        }

        if let Some(id) = route.city_id() {
            self.city_detail.sync(id, &self.auth);
            self.city_detail.poll();
        }
    }

    /// Navigate to what was typed into the actions page: a route path such as
    /// `/cities/12`, or a bare city id. Invalid input is ignored.
    pub fn open_city_from_input(&mut self) -> bool {
        let route = Route::from_path(&self.city_id_input)
            .or_else(|| self.city_id_input.parse::<CityId>().ok().map(Route::City));
        match route {
            Some(route) => {
                self.router.navigate(route);
                true
            }
            None => {
                self.debug_logger.warn(
                    DebugCategory::UI,
                    format!("'{}' is not a city id or path", self.city_id_input),
                );
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.auth.clear();
        self.city_detail.reset();
        self.city_id_input.clear();
        self.debug_logger.info(DebugCategory::Auth, "Logged out");
        self.router.navigate(Route::Register);
    }
}
