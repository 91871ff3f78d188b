use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use walktrack_core::SettingKey;
use walktrack_web::app::App;
use walktrack_web::dom;
use web_sys::HtmlElement;
use yew::Renderer;

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    let storage = dom::local_storage().expect("localStorage");
    for key in SettingKey::ALL {
        storage.remove_item(key.storage_key()).expect("remove setting");
    }
    storage
        .set_item(SettingKey::Username.storage_key(), "Lucía")
        .expect("seed username");
    walktrack_web::i18n::set_lang("es");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

async fn next_frame() {
    yew::platform::time::sleep(std::time::Duration::from_millis(30)).await;
}

fn click(selector: &str) {
    let doc = dom::document().expect("document");
    doc.query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} exists"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

fn text_of(id: &str) -> String {
    dom::document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn boot_persists_balance_and_skips_onboarding() {
    render_app();
    next_frame().await;
    let storage = dom::local_storage().expect("localStorage");
    assert_eq!(
        storage
            .get_item(SettingKey::Points.storage_key())
            .expect("read points")
            .as_deref(),
        Some("1250")
    );
    assert_eq!(text_of("profile-name"), "Lucía");
    let onboarding = dom::document()
        .and_then(|doc| doc.get_element_by_id("onboarding"))
        .expect("onboarding exists");
    assert!(onboarding.has_attribute("hidden"));
}

#[wasm_bindgen_test]
async fn quick_start_opens_activity_and_counts_steps() {
    render_app();
    next_frame().await;
    click(".stats .btn-primary");
    next_frame().await;
    assert_eq!(text_of("live-status"), "En marcha");

    yew::platform::time::sleep(std::time::Duration::from_millis(1_100)).await;
    assert_ne!(text_of("live-steps"), "0 pasos");

    click("#pause-btn");
    next_frame().await;
    let frozen = text_of("live-steps");
    yew::platform::time::sleep(std::time::Duration::from_millis(1_100)).await;
    assert_eq!(text_of("live-steps"), frozen);
    assert_eq!(text_of("start-btn"), "Reanudar");
}

#[wasm_bindgen_test]
async fn premium_upgrade_adds_bonus_and_toasts() {
    render_app();
    next_frame().await;
    click("[data-screen='rewards']");
    next_frame().await;
    click("#premium-btn");
    next_frame().await;
    let toasts = text_of("toast-stack");
    assert!(toasts.contains("Premium activado"));
    assert_eq!(text_of("points-value"), "1400");
}
