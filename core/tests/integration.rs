//! Full pipeline test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the view model,
//! render model, and image loaders over real HTTP using ureq — the same
//! role the host UI plays in the app. Validates request building, response
//! parsing, domain mapping, and placeholder behavior end-to-end.

use gallery_core::{
    placeholder_image, GalleryClient, GalleryRepository, GalleryState, GalleryView,
    GalleryViewModel, HttpRequest, HttpResponse, ImageLoader, ViewTree, PLACEHOLDER_MESSAGE,
};
use mock_server::CatalogImage;

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// handle status interpretation. A transport-level failure comes back as
/// `Err` with a message, the way a host reports it to `fail_fetch`.
fn execute(req: HttpRequest) -> Result<HttpResponse, String> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut builder = agent.get(&req.url);
    for (key, value) in &req.headers {
        builder = builder.header(key, value);
    }

    let mut response = builder.call().map_err(|e| e.to_string())?;
    let status = response.status().as_u16();
    let body = response.body_mut().read_to_vec().map_err(|e| e.to_string())?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

/// Bind a random port now so the catalog can reference the server's own
/// address before it starts serving.
fn bind() -> (std::net::TcpListener, std::net::SocketAddr) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    listener.set_nonblocking(true).unwrap();
    (listener, addr)
}

/// Serve the given catalog on a background thread.
fn serve(std_listener: std::net::TcpListener, images: Option<Vec<CatalogImage>>) {
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, images).await
        })
        .unwrap();
    });
}

/// Start the mock server with the given catalog and return its base URL.
fn start_server(images: Option<Vec<CatalogImage>>) -> String {
    let (listener, addr) = bind();
    serve(listener, images);
    format!("http://{addr}")
}

fn pipeline(base_url: &str) -> (GalleryViewModel, GalleryView) {
    let client = GalleryClient::new(base_url);
    let view_model = GalleryViewModel::new(GalleryRepository::new(client));
    (view_model, GalleryView::new())
}

#[test]
fn fetch_decode_map_render_happy_path() {
    // Catalog whose image URLs point back at the same server.
    let (listener, addr) = bind();
    let catalog = vec![
        CatalogImage::new("Cat", &format!("http://{addr}/assets/cat.png")),
        CatalogImage::new("Dog", &format!("http://{addr}/assets/dog.png")),
    ];
    serve(listener, Some(catalog));

    let (mut vm, mut view) = pipeline(&format!("http://{addr}"));

    // First appearance triggers exactly one fetch.
    let req = view.on_appear(&vm).unwrap();
    assert!(view.on_appear(&vm).is_none());

    vm.complete_fetch(execute(req).unwrap());
    let list = vm.state().image_list().unwrap().clone();
    assert_eq!(list.images.len(), 2);
    assert_eq!(list.images[0].name, "Cat");
    assert_eq!(list.images[1].name, "Dog");

    // The rendered rows follow catalog order.
    let rows = match GalleryView::render(vm.state()) {
        ViewTree::Rows(rows) => rows,
        other => panic!("expected rows, got {other:?}"),
    };
    assert_eq!(rows[0].heading, "Cat");

    // Each row drives its own loader; a real PNG comes back decoded.
    let client = GalleryClient::new(&format!("http://{addr}"));
    let mut loader = ImageLoader::new(client, placeholder_image());
    let req = loader.start(Some(&rows[0].image_url)).unwrap();
    loader.complete(execute(req).unwrap());
    let img = loader.current_image().unwrap();
    assert_eq!((img.width(), img.height()), (8, 8));
    assert_ne!(img, &placeholder_image());
}

#[test]
fn entry_missing_name_fails_the_whole_list() {
    let base = start_server(Some(vec![
        CatalogImage::new("Cat", "http://x/cat.png"),
        CatalogImage {
            name: None,
            imageurl: Some("http://x/dog.png".to_string()),
        },
    ]));
    let (mut vm, mut view) = pipeline(&base);

    let req = view.on_appear(&vm).unwrap();
    vm.complete_fetch(execute(req).unwrap());

    // All-or-nothing: the valid entry does not survive on its own.
    assert!(matches!(vm.state(), GalleryState::Failed(_)));
    assert_eq!(
        GalleryView::render(vm.state()),
        ViewTree::Message(PLACEHOLDER_MESSAGE)
    );
}

#[test]
fn null_images_field_renders_placeholder_not_a_crash() {
    let base = start_server(None);
    let (mut vm, mut view) = pipeline(&base);

    let req = view.on_appear(&vm).unwrap();
    vm.complete_fetch(execute(req).unwrap());

    assert!(matches!(vm.state(), GalleryState::Failed(_)));
    assert_eq!(
        GalleryView::render(vm.state()),
        ViewTree::Message(PLACEHOLDER_MESSAGE)
    );
}

#[test]
fn transport_failure_keeps_placeholder_on_screen() {
    // Bind and immediately drop a listener so the port refuses connections.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (mut vm, mut view) = pipeline(&format!("http://{addr}"));
    let req = view.on_appear(&vm).unwrap();

    match execute(req) {
        Ok(resp) => vm.complete_fetch(resp),
        Err(msg) => vm.fail_fetch(&msg),
    }

    assert!(matches!(vm.state(), GalleryState::Failed(_)));
    assert_eq!(
        GalleryView::render(vm.state()),
        ViewTree::Message(PLACEHOLDER_MESSAGE)
    );
}

#[test]
fn non_image_asset_resolves_to_placeholder() {
    let base = start_server(Some(Vec::new()));
    let client = GalleryClient::new(&base);
    let mut loader = ImageLoader::new(client, placeholder_image());

    let url = format!("{base}/assets/broken");
    let req = loader.start(Some(&url)).unwrap();
    loader.complete(execute(req).unwrap());

    assert_eq!(loader.current_image().unwrap(), &placeholder_image());
}
