/// Route templates registered by every benchmark, as `(method, path)`.
pub static ROUTE_TABLE: &[(&str, &str)] = &[
    ("GET", "/api/status"),
    ("GET", "/api/users"),
    ("POST", "/api/users"),
    ("GET", "/api/users/@{word:name}"),
    ("GET", "/api/users/{uint:id}"),
    ("PUT", "/api/users/{uint:id}"),
    ("DELETE", "/api/users/{uint:id}"),
    ("GET", "/api/users/{uint:id}/*"),
    ("POST", "/api/users/{uint:id}/profile"),
    ("DELETE", "/api/users/{date:from}/to/{date:to}"),
    ("GET", "/api/cities/{geo:location}"),
    ("PUT", r"/api/investments/\${float:dollars}/fund"),
    ("GET", "/api/todos/month/{re:([0][1-9]|[1][0-2])}"),
    ("GET", "/api/sessions/{uuid:session}"),
    ("GET", "/api/colors/{hex:rgb}"),
];

#[derive(Debug, Copy, Clone)]
pub struct RouteCase {
    name: &'static str,
    group: CaseGroup,
    method: &'static str,
    path: &'static str,
}

impl RouteCase {
    pub const fn new(name: &'static str, group: CaseGroup, method: &'static str, path: &'static str) -> Self {
        Self { name, group, method, path }
    }

    pub const fn literal(name: &'static str, method: &'static str, path: &'static str) -> Self {
        Self::new(name, CaseGroup::Literal, method, path)
    }

    pub const fn typed(name: &'static str, method: &'static str, path: &'static str) -> Self {
        Self::new(name, CaseGroup::Typed, method, path)
    }

    pub const fn compound(name: &'static str, method: &'static str, path: &'static str) -> Self {
        Self::new(name, CaseGroup::Compound, method, path)
    }

    pub const fn miss(name: &'static str, method: &'static str, path: &'static str) -> Self {
        Self::new(name, CaseGroup::Miss, method, path)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> CaseGroup {
        self.group
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseGroup {
    Literal,
    Typed,
    Compound,
    Miss,
}

pub static ROUTE_CASES: &[RouteCase] = &[
    RouteCase::literal("literal_status", "GET", "/api/status"),
    RouteCase::typed("typed_uint", "GET", "/api/users/42"),
    RouteCase::typed("typed_word", "GET", "/api/users/@bob"),
    RouteCase::typed("typed_wildcard", "GET", "/api/users/42/avatar.png"),
    RouteCase::compound("compound_date", "DELETE", "/api/users/2024-03-15T10:30:00Z/to/2024-04-01"),
    RouteCase::compound("compound_geo", "GET", "/api/cities/48.2082,16.3738;u=30"),
    RouteCase::miss("miss_path", "GET", "/api/users/abc"),
    RouteCase::miss("miss_method", "PATCH", "/api/users/42"),
];
