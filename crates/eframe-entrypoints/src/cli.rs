use clap::Parser;
use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static ENV_MAP: std::cell::RefCell<HashMap<String, String>> = std::cell::RefCell::new(HashMap::new());
}

/// Arguments and environment overrides carried by a page URL.
///
/// `?clitheme=dark&clizoom-factor=1.5&envLOG_LEVEL=debug` becomes the argument list
/// `[program, "--theme", "dark", "--zoom-factor", "1.5"]` and the environment
/// `{"LOG_LEVEL": "debug"}`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    pub args: Vec<String>,
    pub env: HashMap<String, String>,
}

/// Split the query part of `href` into CLI arguments (`cli` prefix) and
/// environment variables (`env` prefix). Other parameters are ignored.
///
/// Keys and values are form-decoded: `+` is a space and `%XX` escapes are
/// expanded. Malformed escapes are kept as written.
pub fn query_args(program: &str, href: &str) -> QueryArgs {
    let mut parsed = QueryArgs {
        args: vec![program.to_string()],
        env: HashMap::new(),
    };

    let Some((_, query)) = href.split_once('?') else {
        return parsed;
    };
    let query = query.split('#').next().unwrap_or_default();

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let (key, value) = (decode(key), decode(value));
        if let Some(flag) = key.strip_prefix("cli") {
            if !flag.is_empty() {
                parsed.args.push(format!("--{flag}"));
            }
            if !value.is_empty() {
                parsed.args.push(value);
            }
        } else if let Some(var) = key.strip_prefix("env")
            && !var.is_empty()
        {
            parsed.env.insert(var.to_string(), value);
        }
    }

    parsed
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}

/// Generic function to get environment variable, parsing it to the desired type.
///
/// On web the values come from `env`-prefixed GET parameters, see [`parse_env`].
pub fn get_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    #[cfg(target_arch = "wasm32")]
    {
        ENV_MAP.with(|map| map.borrow().get(key).and_then(|s| s.parse().ok()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var(key).ok().and_then(|s| s.parse().ok())
    }
}

#[cfg(target_arch = "wasm32")]
fn location_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn store_env(env: HashMap<String, String>) {
    ENV_MAP.with(|map| map.borrow_mut().extend(env));
}

/// Parses from the command line arguments on native and from GET parameters on web.
pub fn parse_args<T: Parser>() -> Result<T, clap::Error> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        T::try_parse()
    }
    #[cfg(target_arch = "wasm32")]
    {
        use clap::CommandFactory;

        let program = T::command().get_name().to_string();
        let parsed = query_args(&program, &location_href());
        store_env(parsed.env);
        T::try_parse_from(parsed.args)
    }
}

/// Parses environment variables from GET parameters on web. No-op on native, where
/// the process environment is already populated.
pub fn parse_env() {
    #[cfg(target_arch = "wasm32")]
    {
        store_env(query_args("", &location_href()).env);
    }
}
