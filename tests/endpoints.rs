use http::{Method, Request as HttpRequest, Response, StatusCode};
use hyper::Body;
use tower_test::mock;
use twitter_rest::api::{friendships, lists, saved_searches, search, statuses, Request};
use twitter_rest::{Config, DateFormat, MediaFile, Resolver, TwitterService};

type Handle = mock::Handle<HttpRequest<Vec<u8>>, Response<Body>>;

fn service() -> (TwitterService<mock::Mock<HttpRequest<Vec<u8>>, Response<Body>>>, Handle) {
    let (http, handle) = mock::pair();
    (TwitterService::new(http), handle)
}

async fn respond(handle: &mut Handle, status: u16, body: &'static str) -> HttpRequest<Vec<u8>> {
    let (req, send) = handle.next_request().await.unwrap();
    send.send_response(
        Response::builder()
            .status(status)
            .header("X-Rate-Limit-Limit", "180")
            .header("X-Rate-Limit-Remaining", "179")
            .header("X-Rate-Limit-Reset", "1360991702")
            .body(Body::from(body))
            .unwrap(),
    );
    req
}

#[tokio::test]
async fn show_status() {
    let (service, mut handle) = service();

    let req = statuses::Show::new(210_462_857_140_252_672);
    let (res, http_req) = tokio::join!(
        req.send(&service),
        respond(
            &mut handle,
            200,
            r#"{
                "created_at": "Wed Jun 06 20:07:10 +0000 2012",
                "id": 210462857140252672,
                "text": "Along with our new #Twitterbird, we've also updated our Display Guidelines",
                "user": { "id": 6253282, "name": "Twitter API", "screen_name": "twitterapi" }
            }"#,
        ),
    );
    let res = res.unwrap();

    assert_eq!(http_req.method(), Method::GET);
    assert_eq!(
        http_req.uri(),
        "https://api.twitter.com/1.1/statuses/show/210462857140252672.json\
         ?include_entities=1&include_rts=1",
    );

    assert!(res.request_succeeded());
    let tweet = res.content().unwrap();
    assert_eq!(tweet.id, 210_462_857_140_252_672);
    assert_eq!(tweet.created_at.format, DateFormat::RestApi);
    assert_eq!(&*tweet.user.as_ref().unwrap().screen_name, "twitterapi");

    let rate_limit = res.rate_limit_status();
    assert_eq!(rate_limit.limit, 180);
    assert_eq!(rate_limit.remaining, 179);
    assert_eq!(rate_limit.reset_time.unwrap().timestamp(), 1_360_991_702);
    assert!(!res.skipped_due_to_rate_limiting_rule());
}

#[tokio::test]
async fn search_error() {
    let (service, mut handle) = service();

    let mut req = search::Tweets::new("@twitterapi".to_owned());
    req.count(10);
    let (res, http_req) = tokio::join!(
        req.send(&service),
        respond(
            &mut handle,
            429,
            r#"{"errors":[{"code":88,"message":"Rate limit exceeded"}]}"#,
        ),
    );
    let res = res.unwrap();

    assert_eq!(
        http_req.uri(),
        "https://api.twitter.com/1.1/search/tweets.json?q=%40twitterapi&count=10\
         &include_entities=1&include_rts=1",
    );
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(res.content().is_none());
    assert_eq!(res.error().unwrap().errors[0].code, 88);
}

#[tokio::test]
async fn cursored_list() {
    let (mut service, mut handle) = service();
    service.include_entities(false).include_retweets(false);

    let mut req = lists::Members::new();
    req.list_id(8_044_403).cursor(-1);
    let (res, http_req) = tokio::join!(
        req.send(&service),
        respond(
            &mut handle,
            200,
            r#"{
                "users": [{ "id": 1, "name": "a", "screen_name": "a" }],
                "next_cursor": 4611686020936348428,
                "previous_cursor": 0
            }"#,
        ),
    );
    let page = res.unwrap().into_content().unwrap();

    assert_eq!(
        http_req.uri(),
        "https://api.twitter.com/1.1/lists/members.json?list_id=8044403&cursor=-1",
    );
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.next_cursor, 4_611_686_020_936_348_428);
}

#[tokio::test]
async fn authenticated_post() {
    let config = Config::from_toml(
        r#"
            include_retweets = false

            [client]
            key = "consumer_key"
            secret = "consumer_secret"

            [token]
            key = "token"
            secret = "token_secret"
        "#,
    )
    .unwrap();
    let (http, mut handle) = mock::pair();
    let service = TwitterService::from_config(&config, http);

    let req = saved_searches::Create::new("#rust".to_owned());
    let (res, http_req) = tokio::join!(
        req.send(&service),
        respond(
            &mut handle,
            200,
            r##"{"id":1,"name":"#rust","query":"#rust","created_at":"Mon Jun 27 19:32:19 +0000 2011"}"##,
        ),
    );

    assert_eq!(http_req.method(), Method::POST);
    assert_eq!(
        http_req.uri(),
        "https://api.twitter.com/1.1/saved_searches/create.json?query=%23rust&include_entities=1",
    );
    let authorization = http_req.headers()["authorization"].to_str().unwrap();
    assert!(authorization.contains("oauth_token=\"token\""));
    assert_eq!(&*res.unwrap().content().unwrap().query, "#rust");
}

#[tokio::test]
async fn update_with_media() {
    let (service, mut handle) = service();

    let req = statuses::UpdateWithMedia::new(
        "meow".to_owned(),
        vec![
            MediaFile::new("a.jpg", &b"JPEG"[..]),
            MediaFile::new("b.gif", &b"GIF"[..]),
        ],
    );
    let (_, http_req) = tokio::join!(
        req.send(&service),
        respond(&mut handle, 403, r#"{"errors":[{"code":324,"message":"bad"}]}"#),
    );

    let content_type = http_req.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    let body = String::from_utf8(http_req.into_body()).unwrap();
    assert_eq!(body.matches("name=\"media[]\"").count(), 2);
    assert!(body.contains("Content-Type: image/jpeg\r\n"));
    assert!(body.contains("Content-Type: image/gif\r\n"));
}

#[test]
fn friendship_urls() {
    let resolver = Resolver::default();

    let mut req = friendships::Show::new();
    req.source_screen_name("bert".to_owned())
        .target_screen_name("ernie".to_owned());
    assert_eq!(
        resolver.resolve(friendships::Show::PATH, req.segments()),
        "friendships/show.json?source_screen_name=bert&target_screen_name=ernie\
         &include_entities=1&include_rts=1",
    );

    let mut req = friendships::Create::new();
    req.user_id(12).follow(true);
    assert_eq!(friendships::Create::METHOD, Method::POST);
    assert_eq!(
        resolver.resolve(friendships::Create::PATH, req.segments()),
        "friendships/create.json?user_id=12&follow=1&include_entities=1&include_rts=1",
    );
}
