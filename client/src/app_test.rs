use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use super::*;

fn render_guarded(page: Page, outcome: NavigationOutcome) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(Signal::derive(move || outcome));
        view! { <Guarded page=page/> }.to_html()
    })
}

#[test]
fn blocked_page_renders_only_the_pending_notice() {
    let html = render_guarded(Page::Account, NavigationOutcome::RedirectToLogin);
    assert!(html.contains("Redirecting..."), "{html}");
    assert!(!html.contains("Your account"), "{html}");
}

#[test]
fn allowed_page_renders_its_content() {
    let html = render_guarded(Page::About, NavigationOutcome::Allow);
    assert!(html.contains("About us"), "{html}");
    assert!(!html.contains("Redirecting..."), "{html}");
}

#[test]
fn admin_redirect_also_holds_back_content() {
    let html = render_guarded(Page::Home, NavigationOutcome::RedirectToAdminRoot);
    assert!(html.contains("Redirecting..."), "{html}");
    assert!(!html.contains("Featured courses"), "{html}");
}
