//! Startup wiring of the page behaviors onto typed event sources
//!
//! Each `init_*` function registers plain function handlers once; none of
//! them is torn down, the page lives as long as the process.

use crate::events::{
    Click, Event, EventSource, FieldBlur, FieldInput, KeyPress, LinkActivated, Scroll,
    SubmitGesture,
};
use crate::state::{anchor_offset, anchor_target, SiteState, ROW_UNITS};
use crossterm::event::KeyCode;
use std::time::Instant;

/// Event sources the app dispatches terminal input into
#[derive(Default)]
pub struct Bindings {
    pub clicks: EventSource<SiteState, Click>,
    pub keys: EventSource<SiteState, KeyPress>,
    pub scrolls: EventSource<SiteState, Scroll>,
    pub links: EventSource<SiteState, LinkActivated>,
    pub submits: EventSource<SiteState, SubmitGesture>,
    pub blurs: EventSource<SiteState, FieldBlur>,
    pub inputs: EventSource<SiteState, FieldInput>,
}

/// Initialize every behavior in page order
pub fn init_all(site: &mut SiteState, bindings: &mut Bindings) {
    init_navigation(bindings);
    init_smooth_scroll(bindings);
    init_contact_form(bindings);
    init_scroll_animations(site, bindings);
    init_header_scroll(bindings);
    init_link_tracking(bindings);
    tracing::debug!(
        "Behaviors initialized: {} click, {} link, {} scroll handlers",
        bindings.clicks.handler_count(),
        bindings.links.handler_count(),
        bindings.scrolls.handler_count()
    );
}

// Navigation toggle

pub fn init_navigation(bindings: &mut Bindings) {
    bindings.clicks.subscribe(nav_on_click);
    bindings.links.subscribe(nav_on_link);
    bindings.keys.subscribe(nav_on_key);
}

fn nav_on_click(site: &mut SiteState, event: &mut Event<Click>) {
    site.nav.handle_click(event.payload().target);
}

fn nav_on_link(site: &mut SiteState, event: &mut Event<LinkActivated>) {
    if event.payload().in_menu {
        site.nav.close();
    }
}

fn nav_on_key(site: &mut SiteState, event: &mut Event<KeyPress>) {
    if event.payload().code == KeyCode::Esc {
        site.nav.close();
    }
}

// Smooth scroll

pub fn init_smooth_scroll(bindings: &mut Bindings) {
    bindings.links.subscribe(smooth_scroll_on_link);
}

fn smooth_scroll_on_link(site: &mut SiteState, event: &mut Event<LinkActivated>) {
    let Some(id) = anchor_target(&event.payload().href).map(str::to_owned) else {
        return;
    };
    let Some(section) = site.layout.section(&id) else {
        return;
    };

    event.prevent_default();
    let target_top = section.span.top as f32 * ROW_UNITS;
    let offset = anchor_offset(target_top, site.header_height(), site.scroll.max());
    tracing::debug!("Smooth scroll to #{id} at {offset}");
    site.scroll.animate_to(offset, Instant::now());
}

// Contact form

pub fn init_contact_form(bindings: &mut Bindings) {
    bindings.submits.subscribe(contact_on_submit);
    bindings.blurs.subscribe(contact_on_blur);
    bindings.inputs.subscribe(contact_on_input);
}

fn contact_on_submit(site: &mut SiteState, event: &mut Event<SubmitGesture>) {
    site.contact.on_submit(event);
}

fn contact_on_blur(site: &mut SiteState, event: &mut Event<FieldBlur>) {
    site.contact.validate_field(event.payload().0);
}

fn contact_on_input(site: &mut SiteState, event: &mut Event<FieldInput>) {
    site.contact.on_input(event.payload().0);
}

// Scroll animations

pub fn init_scroll_animations(site: &mut SiteState, bindings: &mut Bindings) {
    let cards: Vec<_> = site
        .layout
        .cards
        .iter()
        .map(|c| (c.kind, c.span.extent()))
        .collect();
    for (kind, extent) in cards {
        let idx = site.reveal.observe(extent);
        tracing::trace!("Watching .{} as element {idx}", kind.class());
    }
    tracing::debug!("Watching {} elements for reveal", site.reveal.watched_count());
    bindings.scrolls.subscribe(reveal_on_scroll);
}

fn reveal_on_scroll(site: &mut SiteState, event: &mut Event<Scroll>) {
    let view_height = site.viewport_height();
    site.reveal.check(event.payload().y, view_height, Instant::now());
}

// Header scroll effect

pub fn init_header_scroll(bindings: &mut Bindings) {
    bindings.scrolls.subscribe(header_on_scroll);
}

fn header_on_scroll(site: &mut SiteState, _event: &mut Event<Scroll>) {
    site.header.on_scroll();
}

// Phone and email link tracking

pub fn init_link_tracking(bindings: &mut Bindings) {
    bindings.links.subscribe(track_contact_link);
}

fn track_contact_link(_site: &mut SiteState, event: &mut Event<LinkActivated>) {
    let href = &event.payload().href;
    if href.starts_with("tel:") {
        tracing::info!("Phone link clicked: {href}");
    } else if href.starts_with("mailto:") {
        tracing::info!("Email link clicked: {href}");
    }
}
