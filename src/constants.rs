/// Public website, used to build the link handed back to Alfred
pub const TMDB_BASE_URL: &str = "https://www.themoviedb.org";
/// REST API host
pub const TMDB_API_BASE_URL: &str = "https://api.themoviedb.org";
pub const TMDB_API_VERSION: u32 = 3;

pub const TMDB_API_KEY_ENV: &str = "TMDB_API_KEY";
pub const TMDB_API_BASE_URL_ENV: &str = "TMDB_API_BASE_URL";
pub const TMDB_WEB_BASE_URL_ENV: &str = "TMDB_WEB_BASE_URL";

pub const SEARCH_MOVIE_ENDPOINT: &str = "/search/movie";
