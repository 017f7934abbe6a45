//! Redporto entry point
//!
//! Handles platform-specific initialization and wires the page behaviors.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::{
        Document, Element, Event, FormData, Headers, HtmlAnchorElement, HtmlElement,
        HtmlFormElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit, MouseEvent, NodeList, Request, RequestInit, Response,
        ScrollBehavior, ScrollToOptions, Window,
    };

    use glam::Vec2;
    use redporto::Tuning;
    use redporto::ui::{
        AboutReveal, ProjectInfo, RESET_TRANSFORM, SubmitOutcome, Typewriter, TypingTask,
        carousel_scroll_amount, parallax_offset, parallax_transform, stagger_delay_ms,
        strip_scheme,
    };

    /// Page-lifetime state shared by the nav handler and the section observer
    struct Page {
        tuning: Tuning,
        about: AboutReveal,
        /// Stop handle for the typewriter loop; held for the page's lifetime
        typing: Option<TypingTask>,
    }

    impl Page {
        fn new(tuning: Tuning) -> Self {
            Self {
                tuning,
                about: AboutReveal::new(),
                typing: None,
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Redporto starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let tuning = Tuning::load(&document);
        let page = Rc::new(RefCell::new(Page::new(tuning)));

        reset_scroll_on_refresh(&window, &page);
        setup_nav_links(&window, &document, page.clone());
        setup_menu_toggle(&document);
        setup_hero_parallax(&document, page.clone());
        start_typewriter(&window, &document, page.clone());
        setup_carousels(&document, page.clone());
        setup_section_observer(&document, page.clone());
        setup_contact_form(&document);
        setup_modal(&document);

        log::info!("Redporto ready");
    }

    /// Collect a NodeList's element nodes
    fn elements_of(list: &NodeList) -> Vec<Element> {
        (0..list.length())
            .filter_map(|i| list.get(i).and_then(|node| node.dyn_into::<Element>().ok()))
            .collect()
    }

    /// Strip any URL fragment and force the viewport back to the top
    ///
    /// The delay lets the browser's own scroll-restore pass run first.
    fn reset_scroll_on_refresh(window: &Window, page: &Rc<RefCell<Page>>) {
        let location = window.location();
        if let Ok(hash) = location.hash() {
            if !hash.is_empty() {
                if let (Ok(pathname), Ok(history)) = (location.pathname(), window.history()) {
                    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&pathname));
                }
            }
        }

        let delay_ms = page.borrow().tuning.scroll_reset_delay_ms;
        let window_clone = window.clone();
        let closure = Closure::once(move || {
            window_clone.scroll_to_with_x_and_y(0.0, 0.0);
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
        closure.forget();
    }

    fn setup_nav_links(window: &Window, document: &Document, page: Rc<RefCell<Page>>) {
        let Ok(links) = document.query_selector_all(".nav-link") else {
            return;
        };
        let nav_menu = document.get_element_by_id("navMenu");
        let header_offset = page.borrow().tuning.header_offset_px;

        for link in elements_of(&links) {
            let window = window.clone();
            let document = document.clone();
            let page = page.clone();
            let nav_menu = nav_menu.clone();
            let link_clone = link.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                // Download links keep the browser's default behavior
                if link_clone.has_attribute("download") {
                    return;
                }
                event.prevent_default();

                if let Some(href) = link_clone.get_attribute("href") {
                    if let Some(target) = document.query_selector(&href).ok().flatten() {
                        if let Some(target) = target.dyn_ref::<HtmlElement>() {
                            let options = ScrollToOptions::new();
                            options.set_top(target.offset_top() as f64 - header_offset);
                            options.set_behavior(ScrollBehavior::Smooth);
                            window.scroll_to_with_scroll_to_options(&options);
                        }
                        if href == "#about" {
                            reveal_about_cards(&page, &document, true);
                        }
                    }
                }

                if let Some(menu) = &nav_menu {
                    if menu.class_list().contains("show") {
                        let _ = menu.class_list().remove_1("show");
                    }
                }
            });
            let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_menu_toggle(document: &Document) {
        let (Some(toggle), Some(menu)) = (
            document.get_element_by_id("menuToggle"),
            document.get_element_by_id("navMenu"),
        ) else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let _ = menu.class_list().toggle("show");
        });
        let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_hero_parallax(document: &Document, page: Rc<RefCell<Page>>) {
        let Some(hero) = document
            .query_selector(".hero-right img")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            log::info!("Hero parallax disabled (no hero image)");
            return;
        };
        let (damping, zoom) = {
            let p = page.borrow();
            (p.tuning.parallax_damping, p.tuning.parallax_zoom)
        };

        // Each move writes the transform directly; no easing between frames
        {
            let hero_clone = hero.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = hero_clone.get_bounding_client_rect();
                let offset = parallax_offset(
                    Vec2::new(event.client_x() as f32, event.client_y() as f32),
                    Vec2::new(rect.left() as f32, rect.top() as f32),
                    Vec2::new(rect.width() as f32, rect.height() as f32),
                    damping,
                );
                let _ = hero_clone
                    .style()
                    .set_property("transform", &parallax_transform(offset, zoom));
            });
            let _ =
                hero.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let hero_clone = hero.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let _ = hero_clone.style().set_property("transform", RESET_TRANSFORM);
            });
            let _ = hero
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn start_typewriter(window: &Window, document: &Document, page: Rc<RefCell<Page>>) {
        let Some(span) = document.get_element_by_id("typing-text") else {
            log::info!("Typing effect disabled (no #typing-text element)");
            return;
        };
        let (phrases, speed_ms, pause_ms) = {
            let p = page.borrow();
            (
                p.tuning.typing_phrases.clone(),
                p.tuning.typing_speed_ms,
                p.tuning.typing_pause_ms,
            )
        };
        let Some(typewriter) = Typewriter::new(phrases, speed_ms, pause_ms) else {
            log::info!("Typing effect disabled (empty phrase list)");
            return;
        };

        page.borrow_mut().typing = Some(TypingTask::new());
        let typewriter = Rc::new(RefCell::new(typewriter));

        // First character appears immediately; every later tick reschedules
        // itself with the delay the state machine reports
        let frame = typewriter.borrow_mut().step();
        span.set_text_content(Some(&frame.text));
        schedule_type_tick(window.clone(), span, typewriter, page, frame.delay_ms as i32);
    }

    fn schedule_type_tick(
        window: Window,
        span: Element,
        typewriter: Rc<RefCell<Typewriter>>,
        page: Rc<RefCell<Page>>,
        delay_ms: i32,
    ) {
        let window_clone = window.clone();
        let closure = Closure::once(move || {
            let running = page.borrow().typing.as_ref().is_some_and(|t| t.is_active());
            if !running {
                return;
            }
            let frame = typewriter.borrow_mut().step();
            span.set_text_content(Some(&frame.text));
            schedule_type_tick(window_clone, span, typewriter, page, frame.delay_ms as i32);
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
        closure.forget();
    }

    fn setup_carousels(document: &Document, page: Rc<RefCell<Page>>) {
        let Ok(carousels) = document.query_selector_all(".carousel") else {
            return;
        };
        let gutter = page.borrow().tuning.carousel_gutter_px;

        for carousel in elements_of(&carousels) {
            let Some(parent) = carousel.parent_element() else {
                continue;
            };
            let (Some(button_left), Some(button_right)) = (
                parent.query_selector(".carousel-btn.left").ok().flatten(),
                parent.query_selector(".carousel-btn.right").ok().flatten(),
            ) else {
                log::debug!("Skipping carousel without paired buttons");
                continue;
            };

            for (button, direction) in [(button_right, 1.0), (button_left, -1.0)] {
                let carousel_clone = carousel.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    // Measured at click time: card widths are responsive
                    let amount = carousel_scroll_amount(
                        carousel_clone
                            .query_selector(".card")
                            .ok()
                            .flatten()
                            .and_then(|card| card.dyn_into::<HtmlElement>().ok())
                            .map(|card| card.offset_width()),
                        carousel_clone.client_width(),
                        gutter,
                    );
                    let options = ScrollToOptions::new();
                    options.set_left(direction * amount);
                    options.set_behavior(ScrollBehavior::Smooth);
                    carousel_clone.scroll_by_with_scroll_to_options(&options);
                });
                let _ =
                    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_section_observer(document: &Document, page: Rc<RefCell<Page>>) {
        let Ok(sections) = document.query_selector_all("section") else {
            return;
        };
        let sections = elements_of(&sections);
        if sections.is_empty() {
            return;
        }
        let threshold = page.borrow().tuning.section_visibility_threshold;

        let document_clone = document.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if entry.is_intersecting() {
                        let _ = target.class_list().add_1("show-section");
                        if target.id() == "about" {
                            reveal_about_cards(&page, &document_clone, false);
                        }
                    } else {
                        // Reversible: sections re-hide when scrolled away
                        let _ = target.class_list().remove_1("show-section");
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin("0px");
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                for section in &sections {
                    observer.observe(section);
                }
            }
            Err(err) => log::warn!("Section observer unavailable: {err:?}"),
        }
        callback.forget();
    }

    /// Stage the about-card stagger animation
    ///
    /// Passive calls (from the observer) run at most once per page load; a
    /// forced call (from the About nav link) always re-stages it.
    fn reveal_about_cards(page: &Rc<RefCell<Page>>, document: &Document, force: bool) {
        let Ok(cards) = document.query_selector_all(".about-card") else {
            return;
        };
        let cards = elements_of(&cards);
        if cards.is_empty() {
            return;
        }

        let stagger_ms = page.borrow().tuning.card_stagger_ms;
        if !page.borrow_mut().about.request(force) {
            return;
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        for (index, card) in cards.into_iter().enumerate() {
            let closure = Closure::once(move || {
                let _ = card.class_list().add_1("show-about-card");
            });
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                stagger_delay_ms(index, stagger_ms) as i32,
            );
            closure.forget();
        }
    }

    fn setup_contact_form(document: &Document) {
        let Some(form) = document
            .query_selector("form")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            log::info!("Contact form disabled (no form element)");
            return;
        };

        let document_clone = document.clone();
        let form_clone = form.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            event.prevent_default();
            let Some(status) = status_element(&document_clone, &form_clone) else {
                return;
            };
            // No in-flight guard: a resubmit races the pending request and
            // the last response to settle wins the status line
            spawn_local(submit_contact_form(form_clone.clone(), status));
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Find the form's status line, creating it on first use
    fn status_element(document: &Document, form: &HtmlFormElement) -> Option<HtmlElement> {
        if let Some(existing) = form.query_selector(".form-status").ok().flatten() {
            return existing.dyn_into().ok();
        }
        let status = document.create_element("p").ok()?;
        status.set_class_name("form-status");
        form.append_child(&status).ok()?;
        status.dyn_into().ok()
    }

    async fn submit_contact_form(form: HtmlFormElement, status: HtmlElement) {
        let outcome = match send_form(&form).await {
            Ok(response) if response.ok() => {
                form.reset();
                SubmitOutcome::Sent
            }
            Ok(response) => {
                log::warn!("Form endpoint returned status {}", response.status());
                SubmitOutcome::Failed
            }
            Err(err) => {
                log::warn!("Form submission failed: {err:?}");
                SubmitOutcome::Failed
            }
        };

        status.set_text_content(Some(outcome.message()));
        let _ = status.style().set_property("color", outcome.color());
    }

    /// POST the form's own field set to its declared action; only the HTTP
    /// status is inspected, the body is never read
    async fn send_form(form: &HtmlFormElement) -> Result<Response, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let body = FormData::new_with_form(form)?;
        let headers = Headers::new()?;
        headers.append("Accept", "application/json")?;

        let init = RequestInit::new();
        init.set_method(&form.method());
        init.set_body(body.as_ref());
        init.set_headers(headers.as_ref());

        let request = Request::new_with_str_and_init(&form.action(), &init)?;
        let response = JsFuture::from(window.fetch_with_request(&request)).await?;
        response.dyn_into()
    }

    /// Fixed modal slots, resolved once at startup
    struct ModalSlots {
        overlay: HtmlElement,
        title: Element,
        image: HtmlImageElement,
        description: Element,
        github_container: HtmlElement,
        github_link: HtmlAnchorElement,
        live_container: HtmlElement,
        live_link: HtmlAnchorElement,
    }

    fn modal_slots(document: &Document) -> Option<ModalSlots> {
        let by_id = |id: &str| document.get_element_by_id(id);
        Some(ModalSlots {
            overlay: by_id("projectModalOverlay")?.dyn_into().ok()?,
            title: by_id("modalTitle")?,
            image: by_id("modalImage")?.dyn_into().ok()?,
            description: by_id("modalDescription")?,
            github_container: by_id("modalGithubContainer")?.dyn_into().ok()?,
            github_link: by_id("modalGithubLink")?.dyn_into().ok()?,
            live_container: by_id("modalLiveContainer")?.dyn_into().ok()?,
            live_link: by_id("modalLiveLink")?.dyn_into().ok()?,
        })
    }

    fn setup_modal(document: &Document) {
        let Some(slots) = modal_slots(document) else {
            log::info!("Project modal disabled (missing modal elements)");
            return;
        };
        let slots = Rc::new(slots);

        let Ok(cards) = document.query_selector_all(".clickable-card") else {
            return;
        };
        for card in elements_of(&cards) {
            let slots_clone = slots.clone();
            let card_clone = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                open_modal(&slots_clone, &project_from_card(&card_clone));
            });
            let _ = card.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(close_button) = document.query_selector(".modal-close").ok().flatten() {
            let slots_clone = slots.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                close_modal(&slots_clone.overlay);
            });
            let _ = close_button
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Backdrop close: only a click landing on the overlay itself counts,
        // never one bubbling up from the modal content
        {
            let slots_clone = slots.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(target) = event.target() else {
                    return;
                };
                let target_js: &JsValue = target.as_ref();
                let overlay_js: &JsValue = slots_clone.overlay.as_ref();
                if target_js == overlay_js {
                    close_modal(&slots_clone.overlay);
                }
            });
            let _ = slots
                .overlay
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Flatten a clicked card's data attributes into a typed record
    fn project_from_card(card: &Element) -> ProjectInfo {
        let attr = |name: &str| card.get_attribute(name).unwrap_or_default();
        ProjectInfo::new(
            attr("data-title"),
            attr("data-description"),
            attr("data-image"),
            card.get_attribute("data-github-url"),
            card.get_attribute("data-live-url"),
        )
    }

    fn open_modal(slots: &ModalSlots, project: &ProjectInfo) {
        slots.title.set_text_content(Some(&project.title));
        slots.image.set_src(&project.image);
        slots.description.set_text_content(Some(&project.description));

        if let Some(url) = &project.github_url {
            slots.github_link.set_href(url);
            slots.github_link.set_text_content(Some(strip_scheme(url)));
            let _ = slots.github_container.style().set_property("display", "block");
        } else {
            let _ = slots.github_container.style().set_property("display", "none");
        }

        if let Some(url) = &project.live_url {
            slots.live_link.set_href(url);
            slots.live_link.set_text_content(Some(project.live_label()));
            let _ = slots.live_container.style().set_property("display", "block");
        } else {
            let _ = slots.live_container.style().set_property("display", "none");
        }

        let _ = slots.overlay.style().set_property("display", "flex");
    }

    fn close_modal(overlay: &HtmlElement) {
        let _ = overlay.style().set_property("display", "none");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Redporto (native) starting...");
    log::info!("Page behaviors need a browser - build for wasm32 and serve the page");

    println!("\nTypewriter preview:");
    preview_typewriter();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn preview_typewriter() {
    use redporto::{Tuning, Typewriter};

    let tuning = Tuning::load();
    let mut typewriter = Typewriter::new(
        tuning.typing_phrases,
        tuning.typing_speed_ms,
        tuning.typing_pause_ms,
    )
    .expect("default phrase list is non-empty");

    for _ in 0..12 {
        let frame = typewriter.step();
        println!("{:>5} ms  |{}|", frame.delay_ms, frame.text);
    }
}
