use super::*;

use std::io::Write;

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("orders-dashboard").chain(argv.iter().copied()))
        .expect("args")
}

#[test]
fn cli_flags_override_settings() {
    let args = parse(&[
        "--orders-url",
        "http://127.0.0.1:1/orders.json",
        "--page-size",
        "25",
    ]);
    let mut settings = Settings {
        orders_file: Some(PathBuf::from("from-config.json")),
        ..Settings::default()
    };
    apply_args(&mut settings, &args);

    assert_eq!(settings.orders_url, "http://127.0.0.1:1/orders.json");
    assert_eq!(settings.orders_file, None);
    assert_eq!(settings.page_size, PageSize::TwentyFive);
}

#[test]
fn cli_rejects_unknown_fields_and_page_sizes() {
    let bin = std::iter::once("orders-dashboard");
    assert!(Args::try_parse_from(bin.clone().chain(["--sort", "colour"])).is_err());
    assert!(Args::try_parse_from(bin.clone().chain(["--page-size", "7"])).is_err());
    assert!(Args::try_parse_from(bin.chain(["--desc"])).is_err());
}

#[test]
fn cli_parses_sort_options() {
    let args = parse(&["--sort", "status", "--desc", "--json"]);
    assert_eq!(args.sort, Some(RowField::Status));
    assert!(args.desc);
    assert!(args.json);
}

#[test]
fn invalid_orders_url_is_reported() {
    let settings = Settings {
        orders_url: "not a url".into(),
        ..Settings::default()
    };
    let err = build_source(&settings).err().expect("must fail");
    assert!(err.to_string().contains("invalid orders url"));
}

#[tokio::test]
async fn one_shot_run_renders_orders_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(
        br#"[{
            "order_number": 9,
            "customer": {
                "first_name": "Ola",
                "last_name": "Berg",
                "address": { "line1": "3 Fjord", "city": "Duluth", "state": "MN", "zip": "55802" }
            },
            "order_details": { "value": 12.5, "date": "2021-06-01" },
            "shipping_details": { "date": "2021-06-02" },
            "status": "Shipped"
        }]"#,
    )
    .expect("write");

    let settings = Settings {
        orders_file: Some(file.path().to_path_buf()),
        ..Settings::default()
    };
    let store = OrderStore::new(build_source(&settings).expect("source"));
    let dashboard = Dashboard::new(TableView::new(), "MRI ONLINE");

    run_once(&store, &dashboard, false).await.expect("run");
    let state = store.snapshot();
    assert_eq!(state.orders.len(), 1);
    assert!(dashboard.render(&state).contains("3 Fjord Duluth, MN 55802"));
}

#[tokio::test]
async fn json_run_fails_when_fetch_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = Settings {
        orders_file: Some(dir.path().join("missing.json")),
        ..Settings::default()
    };
    let store = OrderStore::new(build_source(&settings).expect("source"));
    let dashboard = Dashboard::new(TableView::new(), "MRI ONLINE");

    let err = run_once(&store, &dashboard, true)
        .await
        .expect_err("must fail");
    assert_eq!(err.to_string(), render::ERROR);
}

#[tokio::test]
async fn started_fetch_renders_loading_before_the_request_completes() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(b"[]").expect("write");

    let store = Arc::new(OrderStore::new(Arc::new(FileOrderSource::new(
        file.path().to_path_buf(),
    ))));
    let dashboard = Dashboard::new(TableView::new(), "MRI ONLINE");
    let mut updates = store.subscribe();

    start_fetch(&store);
    assert!(store.snapshot().meta.is_loading);
    let screen = dashboard.render(&store.snapshot());
    assert!(screen.contains(render::LOADING));
    assert!(!screen.contains(render::EMPTY));

    while updates.borrow_and_update().meta.is_loading {
        updates.changed().await.expect("store alive");
    }
    assert!(dashboard.render(&store.snapshot()).contains(render::EMPTY));
}
