use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::category::Category;
use crate::config::Config;
use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: String,
}

/// One page of a `/movie/{category}` listing. Only `results` is read.
#[derive(Debug, Deserialize)]
struct ListingPage {
    #[serde(default)]
    results: Option<Vec<Movie>>,
}

/// Source of listings and poster images. Implemented by [`TmdbClient`] and by
/// fakes in tests.
pub trait MovieCatalog: Send + Sync {
    fn fetch_listing(&self, category: Category) -> Result<Vec<Movie>, FetchError>;

    /// Downloads and decodes a poster from its full URL.
    fn fetch_poster(&self, url: &str) -> Result<image::DynamicImage, FetchError>;
}

pub struct TmdbClient {
    client: reqwest::blocking::Client,
    config: Config,
}

impl TmdbClient {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("tmdb_tui/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, FetchError> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        Ok(response)
    }
}

impl MovieCatalog for TmdbClient {
    fn fetch_listing(&self, category: Category) -> Result<Vec<Movie>, FetchError> {
        debug!(category = category.slug(), "requesting listing");
        let body = self.get(&listing_url(&self.config, category))?.text()?;
        parse_listing(&body)
    }

    fn fetch_poster(&self, url: &str) -> Result<image::DynamicImage, FetchError> {
        let bytes = self.get(url)?.bytes()?;
        Ok(image::load_from_memory(&bytes)?)
    }
}

/// `{base}/movie/{category}?api_key=..&language=..&page=1`
pub fn listing_url(config: &Config, category: Category) -> String {
    format!(
        "{}/movie/{}?api_key={}&language={}&page=1",
        config.base_url,
        category.slug(),
        urlencoding::encode(config.api_key()),
        urlencoding::encode(&config.language)
    )
}

pub fn poster_url(image_base_url: &str, poster_path: &str) -> String {
    format!("{image_base_url}{poster_path}")
}

/// Decodes a listing body. An empty body or a JSON `null` is a failure; a
/// body without `results` is an empty listing.
pub fn parse_listing(body: &str) -> Result<Vec<Movie>, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::EmptyBody);
    }

    match serde_json::from_str::<Option<ListingPage>>(body)? {
        Some(page) => Ok(page.results.unwrap_or_default()),
        None => Err(FetchError::EmptyBody),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use secrecy::SecretString;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: &str) -> Config {
        Config {
            api_key: SecretString::from("test-key".to_string()),
            base_url: base_url.to_string(),
            image_base_url: format!("{base_url}/img"),
            language: "id-ID".to_string(),
        }
    }

    async fn fetch_against(
        server: &MockServer,
        category: Category,
    ) -> Result<Vec<Movie>, FetchError> {
        let config = config(&server.uri());
        // The blocking client owns a runtime and must not live on an async worker.
        tokio::task::spawn_blocking(move || TmdbClient::new(config)?.fetch_listing(category))
            .await
            .expect("fetch task panicked")
    }

    #[test]
    fn listing_url_carries_key_language_and_first_page() {
        let url = listing_url(&config("https://api.example"), Category::TopRated);
        assert_eq!(
            url,
            "https://api.example/movie/top_rated?api_key=test-key&language=id-ID&page=1"
        );
    }

    #[test]
    fn poster_url_appends_path() {
        assert_eq!(
            poster_url("https://image.tmdb.org/t/p/w500", "/a.jpg"),
            "https://image.tmdb.org/t/p/w500/a.jpg"
        );
    }

    #[test]
    fn missing_results_is_an_empty_listing() {
        assert_eq!(parse_listing("{}").unwrap(), Vec::<Movie>::new());
        assert_eq!(parse_listing(r#"{"results":null}"#).unwrap(), Vec::<Movie>::new());
    }

    #[test]
    fn absent_body_is_an_error() {
        assert!(matches!(parse_listing(""), Err(FetchError::EmptyBody)));
        assert!(matches!(parse_listing("null"), Err(FetchError::EmptyBody)));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(parse_listing("<html>"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn movies_tolerate_nulls_and_extra_fields() {
        let movies = parse_listing(
            r#"{"page":1,"results":[{"id":7,"title":"B","poster_path":null,
                "vote_average":6.5,"release_date":null,"adult":false}]}"#,
        )
        .unwrap();
        assert_eq!(
            movies,
            vec![Movie {
                id: 7,
                title: "B".to_string(),
                poster_path: None,
                vote_average: 6.5,
                release_date: None,
                overview: String::new(),
            }]
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn each_category_hits_its_endpoint_once() {
        for category in Category::ALL {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path(format!("/movie/{}", category.slug())))
                .and(query_param("api_key", "test-key"))
                .and(query_param("language", "id-ID"))
                .and(query_param("page", "1"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
                .expect(1)
                .mount(&server)
                .await;

            let movies = fetch_against(&server, category).await.unwrap();
            assert!(movies.is_empty());
            server.verify().await;
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn results_keep_response_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/popular"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    {"id": 3, "title": "C", "vote_average": 5.0},
                    {"id": 1, "title": "A", "vote_average": 8.0},
                    {"id": 2, "title": "B", "vote_average": 7.0}
                ]
            })))
            .mount(&server)
            .await;

        let movies = fetch_against(&server, Category::Popular).await.unwrap();
        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn rejected_key_surfaces_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "status_code": 7,
                "status_message": "Invalid API key"
            })))
            .mount(&server)
            .await;

        let err = fetch_against(&server, Category::Upcoming).await.unwrap_err();
        assert_eq!(err.banner_message(), "Request failed with status code 401");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn empty_success_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = fetch_against(&server, Category::Popular).await.unwrap_err();
        assert!(matches!(err, FetchError::EmptyBody));
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        let client = TmdbClient::new(config("http://127.0.0.1:1")).unwrap();
        let err = client.fetch_listing(Category::Popular).unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
        assert!(!err.banner_message().is_empty());
    }

    #[test]
    fn network_errors_never_expose_the_api_key() {
        let mut config = config("http://127.0.0.1:1");
        config.api_key = SecretString::from("super-secret-key".to_string());
        let client = TmdbClient::new(config).unwrap();

        let err = client.fetch_listing(Category::Popular).unwrap_err();
        let banner = err.banner_message();
        assert!(!banner.contains("super-secret-key"), "banner: {banner}");
        assert!(!format!("{err:?}").contains("super-secret-key"));
    }
}
