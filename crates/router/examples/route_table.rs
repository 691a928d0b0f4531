use micro_router::{PathValues, RouteError, TrieRouter};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

type Handler = fn(&PathValues) -> String;

fn get_user(values: &PathValues) -> String {
    format!("user #{}", values.get("id").unwrap_or_default())
}

fn get_user_by_name(values: &PathValues) -> String {
    format!("user @{}", values.get("name").unwrap_or_default())
}

fn update_user(values: &PathValues) -> String {
    format!("updated user #{}", values.get("id").unwrap_or_default())
}

fn list_events(values: &PathValues) -> String {
    format!(
        "events from {}-{}-{} to {}",
        values.get("from_year").unwrap_or_default(),
        values.get("from_mon").unwrap_or("01"),
        values.get("from_mday").unwrap_or("01"),
        values.get("to").unwrap_or_default(),
    )
}

fn city(values: &PathValues) -> String {
    format!("city at {},{}", values.get("location_lat").unwrap_or_default(), values.get("location_lon").unwrap_or_default())
}

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let router = match TrieRouter::<Handler>::builder()
        .get("/api/users/{uint:id}", get_user)
        .get("/api/users/@{word:name}", get_user_by_name)
        .put("/api/users/{uint:id}", update_user)
        .get("/api/events/{date:from}/to/{date:to}", list_events)
        .get("/api/cities/{geo:location}", city)
        .build()
    {
        Ok(router) => router,
        Err(e) => {
            error!(cause = %e, "invalid route table");
            return;
        }
    };

    for route in router.routes() {
        info!(%route, "route");
    }

    let requests = [
        ("GET", "/api/users/42"),
        ("HEAD", "/api/users/@bob"),
        ("PUT", "/api/users/7"),
        ("GET", "/api/events/2024-03/to/2024-04-30"),
        ("GET", "/api/cities/48.2082,16.3738"),
        ("GET", "/api/users/abc"),
        ("POST", "/api/users/42"),
    ];

    for (method, path) in requests {
        let mut values = PathValues::new();
        match router.find_handler(method, path, Some(&mut values)) {
            Ok(handler) => info!(method, path, response = %handler(&values), "matched"),
            Err(e @ RouteError::BadMethod) => {
                info!(method, path, status = %e.status_code(), allow = %router.path_methods(path), "{e}");
            }
            Err(e) => info!(method, path, status = %e.status_code(), "{e}"),
        }
    }
}
