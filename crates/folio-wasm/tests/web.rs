//! Browser tests for the DOM bindings.
//!
//! Run with `wasm-pack test --headless --firefox crates/folio-wasm`.

#![cfg(target_arch = "wasm32")]

use folio_core::SiteConfig;
use folio_wasm::Site;
use js_sys::{Array, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit, Touch, TouchEvent,
    TouchEventInit, TouchInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const PANELS: &str = r#"
<div class="highlight-panel active">
  <div class="highlight-photo"><img src="a.jpg" alt="Harbour"></div>
  <div class="highlight-photo"><img src="b.jpg" alt="Ridge"></div>
  <div class="highlight-photo"><img src="c.jpg" alt=""></div>
</div>
<div class="highlight-panel">
  <div class="highlight-photo"><img src="z.jpg" alt="Hidden"></div>
</div>
"#;

/// Controls sit beside the content, so only stopped propagation keeps their
/// clicks away from the backdrop handler.
const SIDE_CONTROLS: &str = r#"
<div id="lightbox">
  <div class="lightbox__content">
    <img id="lightboxImg" src="" alt="">
    <span id="lightboxCounter"></span>
  </div>
  <button id="lightboxClose"></button>
  <button id="lightboxPrev"></button>
  <button id="lightboxNext"></button>
</div>
"#;

const INNER_CONTROLS: &str = r#"
<div id="lightbox">
  <div class="lightbox__content">
    <img id="lightboxImg" src="" alt="">
    <button id="lightboxClose"></button>
    <button id="lightboxPrev"></button>
    <button id="lightboxNext"></button>
    <span id="lightboxCounter"></span>
  </div>
</div>
"#;

fn gallery() -> String {
    format!("{PANELS}{INNER_CONTROLS}")
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(html: &str) -> Site {
    mount_with(html, &SiteConfig::default())
}

fn mount_with(html: &str, config: &SiteConfig) -> Site {
    let doc = document();
    doc.body().unwrap().set_inner_html(html);
    Site::install(config).unwrap()
}

fn el(selector: &str) -> Element {
    document().query_selector(selector).unwrap().unwrap()
}

fn click(selector: &str) {
    el(selector).dyn_into::<HtmlElement>().unwrap().click();
}

fn text(selector: &str) -> String {
    el(selector).text_content().unwrap_or_default()
}

fn has_class(selector: &str, class: &str) -> bool {
    el(selector).class_list().contains(class)
}

fn style(selector: &str, property: &str) -> String {
    el(selector)
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value(property)
        .unwrap()
}

fn body_overflow() -> String {
    document()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

fn press(target: &Element, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn touch(target: &Element, kind: &str, screen_x: f64) {
    let init = TouchInit::new(0, target);
    init.set_screen_x(screen_x);
    let point = Touch::new(&init).unwrap();

    let event_init = TouchEventInit::new();
    event_init.set_bubbles(true);
    event_init.set_changed_touches(&Array::of1(&point));
    let event = TouchEvent::new_with_event_init_dict(kind, &event_init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn swipe(target: &Element, from_x: f64, to_x: f64) {
    touch(target, "touchstart", from_x);
    touch(target, "touchend", to_x);
}

fn supports_touch() -> bool {
    Reflect::has(&web_sys::window().unwrap(), &JsValue::from_str("Touch")).unwrap_or(false)
}

async fn sleep(ms: i32) {
    let delay = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(delay).await.unwrap();
}

#[wasm_bindgen_test]
fn empty_page_installs_nothing() {
    let site = mount("");
    assert_eq!(site.installed(), 0);
    assert!(!site.scroll_lock().is_locked());
}

#[wasm_bindgen_test]
fn lightbox_opens_on_clicked_photo_and_wraps() {
    let _site = mount(&gallery());

    click(".highlight-panel.active .highlight-photo:nth-child(2) img");
    assert!(has_class("#lightbox", "active"));
    assert_eq!(text("#lightboxCounter"), "2 / 3");
    assert_eq!(el("#lightboxImg").get_attribute("src").as_deref(), Some("b.jpg"));
    assert_eq!(body_overflow(), "hidden");

    click("#lightboxNext");
    click("#lightboxNext");
    assert_eq!(text("#lightboxCounter"), "1 / 3");
    assert!(has_class("#lightbox", "active"));

    click("#lightboxPrev");
    assert_eq!(text("#lightboxCounter"), "3 / 3");

    click("#lightboxClose");
    assert!(!has_class("#lightbox", "active"));
    assert_eq!(el("#lightbox").get_attribute("aria-hidden").as_deref(), Some("true"));
    assert_eq!(body_overflow(), "");
}

#[wasm_bindgen_test]
fn backdrop_closes_but_content_does_not() {
    let _site = mount(&gallery());
    click(".highlight-panel.active .highlight-photo img");

    click("#lightboxImg");
    assert!(has_class("#lightbox", "active"));

    click("#lightbox");
    assert!(!has_class("#lightbox", "active"));
}

#[wasm_bindgen_test]
fn keyboard_opens_navigates_and_closes() {
    let _site = mount(&gallery());
    let photo = el(".highlight-panel.active .highlight-photo");

    press(&photo, "Enter");
    assert_eq!(text("#lightboxCounter"), "1 / 3");

    let doc = document();
    press(&doc.document_element().unwrap(), "ArrowLeft");
    assert_eq!(text("#lightboxCounter"), "3 / 3");

    press(&doc.document_element().unwrap(), "Escape");
    assert!(!has_class("#lightbox", "active"));
    assert_eq!(body_overflow(), "");
}

#[wasm_bindgen_test]
fn space_opens_focused_photo() {
    let _site = mount(&gallery());
    let photo = el(".highlight-panel.active .highlight-photo:nth-child(3)");

    press(&photo, " ");
    assert!(has_class("#lightbox", "active"));
    assert_eq!(text("#lightboxCounter"), "3 / 3");
}

#[wasm_bindgen_test]
fn control_clicks_never_reach_the_backdrop() {
    let _site = mount(&format!("{PANELS}{SIDE_CONTROLS}"));
    click(".highlight-panel.active .highlight-photo img");
    assert_eq!(text("#lightboxCounter"), "1 / 3");

    click("#lightboxNext");
    assert!(has_class("#lightbox", "active"));
    assert_eq!(text("#lightboxCounter"), "2 / 3");

    click("#lightboxPrev");
    click("#lightboxPrev");
    assert!(has_class("#lightbox", "active"));
    assert_eq!(text("#lightboxCounter"), "3 / 3");

    click("#lightbox");
    assert!(!has_class("#lightbox", "active"));
}

#[wasm_bindgen_test]
fn swipe_navigates_only_past_threshold() {
    if !supports_touch() {
        return;
    }
    let _site = mount(&gallery());
    let modal = el("#lightbox");
    click(".highlight-panel.active .highlight-photo img");

    swipe(&modal, 300.0, 250.0);
    assert_eq!(text("#lightboxCounter"), "1 / 3");

    swipe(&modal, 300.0, 249.0);
    assert_eq!(text("#lightboxCounter"), "2 / 3");

    swipe(&modal, 200.0, 251.0);
    assert_eq!(text("#lightboxCounter"), "1 / 3");
    assert!(has_class("#lightbox", "active"));
}

#[wasm_bindgen_test]
async fn dropping_site_cancels_staggered_reveals() {
    let config = SiteConfig::default().reveal_stagger_ms(500);
    let site = mount_with(
        r#"
        <div class="reveal" id="first" style="height: 20px"></div>
        <div class="reveal" id="second" style="height: 20px"></div>
        "#,
        &config,
    );

    sleep(200).await;
    assert!(has_class("#first", "revealed"));
    assert!(!has_class("#second", "revealed"));

    drop(site);
    sleep(700).await;
    assert!(!has_class("#second", "revealed"));
}

#[wasm_bindgen_test]
fn photos_in_inactive_panels_do_not_open() {
    let _site = mount(&gallery());
    click(".highlight-panel:not(.active) img");
    assert!(!has_class("#lightbox", "active"));
}

#[wasm_bindgen_test]
fn single_photo_hides_navigation() {
    let html = gallery().replacen(
        r#"<div class="highlight-photo"><img src="b.jpg" alt="Ridge"></div>
  <div class="highlight-photo"><img src="c.jpg" alt=""></div>"#,
        "",
        1,
    );
    let _site = mount(&html);

    click(".highlight-panel.active img");
    assert_eq!(text("#lightboxCounter"), "1 / 1");
    assert_eq!(style("#lightboxPrev", "display"), "none");
    assert_eq!(style("#lightboxNext", "display"), "none");
}

#[wasm_bindgen_test]
fn photo_targets_are_focusable_buttons() {
    let _site = mount(&gallery());
    let photos = document().query_selector_all(".highlight-photo").unwrap();
    let labels: Vec<_> = (0..photos.length())
        .map(|i| photos.item(i).unwrap().dyn_into::<Element>().unwrap())
        .inspect(|photo| {
            assert_eq!(photo.get_attribute("tabindex").as_deref(), Some("0"));
            assert_eq!(photo.get_attribute("role").as_deref(), Some("button"));
        })
        .map(|photo| photo.get_attribute("aria-label").unwrap())
        .collect();
    assert_eq!(
        labels,
        [
            "View photo: Harbour",
            "View photo: Ridge",
            "View photo",
            "View photo: Hidden"
        ]
    );
}

#[wasm_bindgen_test]
fn carousel_builds_one_dot_per_slide() {
    let _site = mount(
        r#"
        <div id="carouselTrack">
          <div class="carousel__slide"></div>
          <div class="carousel__slide"></div>
          <div class="carousel__slide"></div>
        </div>
        <div id="carouselDots"></div>
        "#,
    );
    let dots = document().query_selector_all(".carousel__dot").unwrap();
    assert_eq!(dots.length(), 3);
    assert!(has_class(".carousel__dot:first-child", "active"));
    assert!(!has_class(".carousel__dot:last-child", "active"));
    assert_eq!(
        el(".carousel__dot:last-child").get_attribute("aria-label").as_deref(),
        Some("Go to slide 3")
    );
}

#[wasm_bindgen_test]
fn mobile_menu_toggles_and_holds_scroll_lock() {
    let site = mount(
        r##"
        <nav id="nav">
          <button id="hamburger"></button>
          <ul id="navLinks"><li><a class="nav__link" href="#about">About</a></li></ul>
        </nav>
        "##,
    );

    click("#hamburger");
    assert!(has_class("#navLinks", "open"));
    assert!(has_class(".nav__overlay", "active"));
    assert!(site.scroll_lock().is_locked());

    click(".nav__link");
    assert!(!has_class("#navLinks", "open"));
    assert!(!has_class("#hamburger", "active"));
    assert_eq!(body_overflow(), "");
}
