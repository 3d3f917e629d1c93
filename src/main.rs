//! Combo Breakout entry point
//!
//! The browser build wires the DOM, WebGPU and Web Audio to the game loop.
//! The native build runs a headless demo session and logs the outcome.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_host {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{Context, Result, anyhow};
    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, EventTarget, HtmlCanvasElement, HtmlInputElement, HtmlSelectElement,
        KeyboardEvent, MouseEvent, TouchEvent,
    };

    use combo_breakout::audio::WebAudio;
    use combo_breakout::autopilot::Autopilot;
    use combo_breakout::renderer::{FrameRenderer, Presenter, surface_to_playfield};
    use combo_breakout::shop::CATALOG;
    use combo_breakout::settings::QualityPreset;
    use combo_breakout::sim::{Command, GameEvent, GamePhase, key_command};
    use combo_breakout::{GameLoop, Settings};

    type Game = GameLoop<FrameRenderer, WebAudio>;
    type Shared = Rc<RefCell<Host>>;
    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Everything the DOM callbacks share
    struct Host {
        game: Game,
        canvas: HtmlCanvasElement,
        document: Document,
        /// Pending animation frame request
        frame_request: Option<i32>,
        /// "Exit to menu?" dialog is open (the run is paused underneath)
        confirm_exit: bool,
        /// Settings panel is open over the menu or pause screen
        settings_open: bool,
        demo: Option<Autopilot>,
    }

    impl Host {
        fn command(&mut self, command: Command) -> bool {
            if self.confirm_exit {
                return false;
            }
            self.game.handle_command(command, now_ms())
        }

        /// Escape / home button: pause and ask before abandoning the run
        fn request_exit(&mut self) {
            if self.game.state.phase == GamePhase::Playing {
                self.game.handle_command(Command::TogglePause, now_ms());
                self.confirm_exit = true;
            }
        }

        fn answer_exit(&mut self, confirmed: bool) {
            if !self.confirm_exit {
                return;
            }
            self.confirm_exit = false;
            let command = if confirmed {
                Command::ExitToMenu
            } else {
                Command::TogglePause
            };
            self.game.handle_command(command, now_ms());
        }

        /// Fill the settings panel from the current settings and show it
        fn open_settings(&mut self) {
            let doc = &self.document;
            let settings = self.game.settings();
            if let Some(select) = element::<HtmlSelectElement>(doc, "settings-quality") {
                select.set_value(settings.quality.as_str());
            }
            for (id, checked) in [
                ("settings-particles", settings.particles),
                ("settings-show-fps", settings.show_fps),
                ("settings-reduced-motion", settings.reduced_motion),
            ] {
                if let Some(input) = element::<HtmlInputElement>(doc, id) {
                    input.set_checked(checked);
                }
            }
            for (id, volume) in [
                ("settings-master-volume", settings.master_volume),
                ("settings-sfx-volume", settings.sfx_volume),
            ] {
                if let Some(input) = element::<HtmlInputElement>(doc, id) {
                    input.set_value_as_number((volume * 100.0).round() as f64);
                }
            }
            self.settings_open = true;
        }

        /// Apply whatever the settings panel shows; missing controls keep their value
        fn apply_settings_panel(&mut self) {
            let doc = &self.document;
            let mut settings = self.game.settings().clone();

            if let Some(quality) = element::<HtmlSelectElement>(doc, "settings-quality")
                .and_then(|select| QualityPreset::parse(&select.value()))
            {
                settings.quality = quality;
            }
            let checked =
                |id: &str| element::<HtmlInputElement>(doc, id).map(|input| input.checked());
            settings.particles = checked("settings-particles").unwrap_or(settings.particles);
            settings.show_fps = checked("settings-show-fps").unwrap_or(settings.show_fps);
            settings.reduced_motion =
                checked("settings-reduced-motion").unwrap_or(settings.reduced_motion);

            let volume = |id: &str| {
                element::<HtmlInputElement>(doc, id)
                    .map(|input| input.value_as_number() / 100.0)
                    .filter(|v| v.is_finite())
                    .map(|v| v as f32)
            };
            settings.master_volume =
                volume("settings-master-volume").unwrap_or(settings.master_volume);
            settings.sfx_volume = volume("settings-sfx-volume").unwrap_or(settings.sfx_volume);

            self.game.apply_settings(settings);
        }

        /// Map a point in canvas CSS pixels to the playfield and move the paddle
        fn pointer_at(&mut self, css_x: f32, css_y: f32) {
            let size = (
                self.canvas.client_width() as f32,
                self.canvas.client_height() as f32,
            );
            let (x, _) = surface_to_playfield(css_x, css_y, size);
            self.command(Command::PointerMove(x));
        }

        fn resize(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let dpr = window.device_pixel_ratio();
            let width = (self.canvas.client_width() as f64 * dpr) as u32;
            let height = (self.canvas.client_height() as f64 * dpr) as u32;
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            if let Some(presenter) = self
                .game
                .renderer_mut()
                .and_then(FrameRenderer::presenter_mut)
            {
                presenter.resize(width, height);
            }
        }

        fn on_frame(&mut self, time: f64) {
            if let Some(bot) = self.demo.as_mut() {
                let now = now_ms();
                for command in bot.commands(&self.game.state) {
                    self.game.handle_command(command, now);
                }
            }

            self.game.on_animation_frame(time);

            for notice in self.game.take_notices() {
                match notice {
                    GameEvent::LevelCleared { level } => {
                        set_text(&self.document, "shop-title", &format!("Level {level} cleared!"));
                    }
                    GameEvent::GameOver => {
                        self.demo = None;
                    }
                    _ => {}
                }
            }

            self.update_hud(time);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, now: f64) {
            let doc = &self.document;
            let state = &self.game.state;
            let economy = &state.economy;

            set_text(doc, "hud-score", &economy.score.to_string());
            set_text(doc, "hud-lives", &economy.lives.to_string());
            set_text(doc, "hud-money", &economy.money.to_string());
            set_text(doc, "hud-level", &state.bricks.level().to_string());

            let show_fps = self.game.settings().show_fps;
            set_visible(doc, "hud-fps", show_fps);
            if show_fps {
                let fps = self.game.fps().unwrap_or(0);
                set_text(doc, "hud-fps-value", &fps.to_string());
            }

            // Ball stats
            let effects = &state.ball.effects;
            let speed = (state.ball.base_speed() * effects.speed_multiplier).round();
            set_text(
                doc,
                "hud-speed",
                &format!("{speed} ( {} )", percentage(effects.speed_multiplier)),
            );
            set_text(
                doc,
                "hud-damage",
                &format!(
                    "{:.1} ( {} )",
                    combo_breakout::consts::BASE_BALL_DAMAGE * effects.damage_multiplier,
                    percentage(effects.damage_multiplier)
                ),
            );
            let stats = &state.paddle.stats;
            set_visible(doc, "hud-missiles", stats.has_missile_launcher);
            set_text(doc, "hud-missiles-value", &stats.missile_ammo.to_string());
            if let Some(button) = doc.get_element_by_id("fire-btn") {
                let _ = if stats.has_missile_launcher && stats.missile_ammo > 0 {
                    button.remove_attribute("disabled")
                } else {
                    button.set_attribute("disabled", "")
                };
                button.set_text_content(Some(&format!("Fire ({})", stats.missile_ammo)));
            }

            // Combo popup
            let combo = &economy.combo;
            let combo_visible = economy.combo_display_visible(now);
            set_visible(doc, "combo-popup", combo_visible);
            if combo_visible {
                set_text(doc, "combo-count", &format!("{}x Combo!", combo.count));
                set_text(doc, "combo-earnings", &format!("+${}", combo.earnings));
            }

            let phase = state.phase;
            set_visible(
                doc,
                "launch-prompt",
                phase == GamePhase::Playing && !state.ball.is_launched(),
            );
            let settings_open = self.settings_open;
            set_visible(doc, "menu", phase == GamePhase::Menu && !settings_open);
            set_visible(
                doc,
                "pause-menu",
                phase == GamePhase::Paused && !self.confirm_exit && !settings_open,
            );
            set_visible(doc, "settings-panel", settings_open);
            set_visible(doc, "confirm-exit", self.confirm_exit);

            set_visible(doc, "game-over", phase == GamePhase::GameOver);
            if phase == GamePhase::GameOver {
                set_text(doc, "final-score", &economy.score.to_string());
                set_text(doc, "final-money", &economy.money.to_string());
            }

            set_visible(doc, "shop-panel", phase == GamePhase::Shop);
            if phase == GamePhase::Shop {
                set_text(doc, "shop-money", &economy.money.to_string());
                for upgrade in CATALOG {
                    let price = upgrade.price(state.rich_mode);
                    let selector = format!("#buy-{} .price", upgrade.id);
                    if let Some(el) = doc.query_selector(&selector).ok().flatten() {
                        el.set_text_content(Some(&format!("${price}")));
                    }
                    if let Some(button) = doc.get_element_by_id(&format!("buy-{}", upgrade.id)) {
                        let _ = if economy.can_afford(price) {
                            button.remove_attribute("disabled")
                        } else {
                            button.set_attribute("disabled", "")
                        };
                    }
                }
            }

            set_text(
                doc,
                "mute-btn",
                if self.game.is_muted() { "Unmute" } else { "Mute" },
            );
        }
    }

    /// Owns the animation frame callback; `stop` cancels the pending request
    struct LoopHandle {
        host: Shared,
        callback: FrameCallback,
    }

    impl LoopHandle {
        fn start(host: Shared) -> Self {
            let callback: FrameCallback = Rc::new(RefCell::new(None));
            let next = callback.clone();
            let loop_host = host.clone();

            *callback.borrow_mut() = Some(Closure::new(move |time: f64| {
                let running = {
                    let mut h = loop_host.borrow_mut();
                    h.frame_request = None;
                    h.on_frame(time);
                    h.game.is_running()
                };
                if running {
                    let id = next.borrow().as_ref().and_then(request_frame);
                    loop_host.borrow_mut().frame_request = id;
                }
            }));

            host.borrow_mut().game.start();
            let id = callback.borrow().as_ref().and_then(request_frame);
            host.borrow_mut().frame_request = id;

            Self { host, callback }
        }

        fn stop(&self) {
            let mut h = self.host.borrow_mut();
            h.game.stop();
            if let Some(id) = h.frame_request.take()
                && let Some(window) = web_sys::window()
            {
                let _ = window.cancel_animation_frame(id);
            }
            drop(h);
            self.callback.borrow_mut().take();
        }
    }

    fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Option<i32> {
        web_sys::window()?
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    /// Milliseconds on the same clock as animation frame timestamps
    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn percentage(multiplier: f32) -> String {
        let pct = ((multiplier - 1.0) * 100.0).round() as i32;
        if pct >= 0 { format!("+{pct}%") } else { format!("{pct}%") }
    }

    fn set_text(doc: &Document, id: &str, text: &str) {
        if let Some(el) = doc.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn element<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
        doc.get_element_by_id(id)?.dyn_into::<T>().ok()
    }

    fn set_visible(doc: &Document, id: &str, visible: bool) {
        if let Some(el) = doc.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", !visible);
        }
    }

    /// Register a listener for the page's lifetime
    fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to listen for {event}: {e:?}");
        }
        closure.forget();
    }

    /// Listener on an element looked up by id; missing elements are skipped
    fn on_click(
        doc: &Document,
        id: &str,
        host: &Shared,
        mut action: impl FnMut(&mut Host) + 'static,
    ) {
        let Some(el) = doc.get_element_by_id(id) else {
            log::debug!("No #{id} element");
            return;
        };
        let host = host.clone();
        listen(&el, "click", move |_event: web_sys::Event| {
            let mut h = host.borrow_mut();
            h.game.audio_mut().init();
            action(&mut h);
        });
    }

    async fn create_presenter(
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<Presenter> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| anyhow!("failed to create surface: {e}"))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("no suitable GPU adapter: {e}"))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        Presenter::new(surface, &adapter, width, height).await
    }

    pub async fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| anyhow!("failed to init logger: {e}"))?;

        log::info!("Combo Breakout starting...");

        let window = web_sys::window().context("no window")?;
        let document = window.document().context("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .context("no #canvas element")?
            .dyn_into()
            .map_err(|_| anyhow!("#canvas is not a canvas"))?;

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let mut game = GameLoop::new(settings.clone(), WebAudio::new());

        let seed = js_sys::Date::now() as u64;
        match create_presenter(&canvas, width, height).await {
            Ok(presenter) => {
                game.attach_renderer(FrameRenderer::with_presenter(&settings, seed, presenter));
            }
            Err(e) => {
                // Without a draw surface the game stays on its first frame
                log::error!("WebGPU unavailable: {e:#}");
                set_text(&document, "loading", "WebGPU is not available in this browser");
            }
        }

        if let Some(checkbox) = element::<HtmlInputElement>(&document, "rich-mode") {
            checkbox.set_checked(settings.rich_mode);
        }

        let host: Shared = Rc::new(RefCell::new(Host {
            game,
            canvas: canvas.clone(),
            document: document.clone(),
            frame_request: None,
            confirm_exit: false,
            settings_open: false,
            demo: None,
        }));

        build_shop(&document, &host)?;
        setup_input_handlers(&window, &canvas, &host);
        setup_buttons(&document, &host);
        setup_settings_panel(&document, &host);
        setup_auto_pause(&window, &document, &host);

        if host.borrow().game.renderer().is_some() {
            set_visible(&document, "loading", false);
        }
        set_visible(&document, "hud", true);

        let handle = Rc::new(LoopHandle::start(host));
        {
            let handle = handle.clone();
            listen(&window, "pagehide", move |_event: web_sys::Event| {
                handle.stop();
            });
        }

        log::info!("Combo Breakout running!");
        Ok(())
    }

    fn build_shop(document: &Document, host: &Shared) -> Result<()> {
        let list = document
            .get_element_by_id("shop-items")
            .context("no #shop-items element")?;

        for (index, upgrade) in CATALOG.iter().enumerate() {
            let button = document
                .create_element("button")
                .map_err(|e| anyhow!("failed to create shop button: {e:?}"))?;
            button.set_id(&format!("buy-{}", upgrade.id));
            let _ = button.set_attribute("class", "shop-item");
            button.set_inner_html(&format!(
                "<strong>{}</strong><span>{}</span><em class=\"price\"></em>",
                upgrade.name, upgrade.description
            ));
            list.append_child(&button)
                .map_err(|e| anyhow!("failed to add shop button: {e:?}"))?;

            let host = host.clone();
            listen(&button, "click", move |_event: web_sys::Event| {
                host.borrow_mut().command(Command::Purchase(index));
            });
        }
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, canvas: &HtmlCanvasElement, host: &Shared) {
        // Keyboard (bound on the window so focus does not matter)
        {
            let host = host.clone();
            listen(window, "keydown", move |event: KeyboardEvent| {
                let mut h = host.borrow_mut();
                h.game.audio_mut().init();
                let code = event.code();
                match code.as_str() {
                    "Escape" => h.request_exit(),
                    "KeyM" => {
                        h.game.toggle_mute();
                    }
                    "KeyI" => {
                        let demo = h.demo.is_none();
                        h.demo = demo.then(Autopilot::new);
                        log::info!("Demo mode: {demo}");
                    }
                    _ => {
                        if let Some(command) = key_command(&code, true) {
                            if command == Command::Launch {
                                event.prevent_default();
                            }
                            h.command(command);
                        }
                    }
                }
            });
        }
        {
            let host = host.clone();
            listen(window, "keyup", move |event: KeyboardEvent| {
                if let Some(command) = key_command(&event.code(), false) {
                    host.borrow_mut().command(command);
                }
            });
        }

        // Mouse: absolute paddle position, click launches
        {
            let host = host.clone();
            listen(canvas, "mousemove", move |event: MouseEvent| {
                host.borrow_mut()
                    .pointer_at(event.offset_x() as f32, event.offset_y() as f32);
            });
        }
        {
            let host = host.clone();
            listen(canvas, "mousedown", move |_event: MouseEvent| {
                let mut h = host.borrow_mut();
                h.game.audio_mut().init();
                h.command(Command::Launch);
            });
        }

        // Touch: drag moves the paddle, tap launches
        for (event_name, launch) in [("touchstart", true), ("touchmove", false)] {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            listen(canvas, event_name, move |event: TouchEvent| {
                event.prevent_default();
                let mut h = host.borrow_mut();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    h.pointer_at(x, y);
                }
                if launch {
                    h.game.audio_mut().init();
                    h.command(Command::Launch);
                }
            });
        }

        {
            let host = host.clone();
            listen(window, "resize", move |_event: web_sys::Event| {
                host.borrow_mut().resize();
            });
        }
    }

    fn setup_buttons(document: &Document, host: &Shared) {
        on_click(document, "start-btn", host, |h| {
            let rich = element::<HtmlInputElement>(&h.document, "rich-mode")
                .is_some_and(|checkbox| checkbox.checked());
            if rich != h.game.settings().rich_mode {
                let settings = Settings {
                    rich_mode: rich,
                    ..h.game.settings().clone()
                };
                h.game.apply_settings(settings);
            }
            h.game.state.rich_mode = rich;
            h.command(Command::StartGame);
        });
        on_click(document, "play-again-btn", host, |h| {
            h.command(Command::StartGame);
        });
        on_click(document, "back-to-menu-btn", host, |h| {
            h.command(Command::ExitToMenu);
        });
        on_click(document, "shop-btn", host, |h| {
            h.command(Command::OpenShop);
        });
        on_click(document, "shop-close", host, |h| {
            h.command(Command::CloseShop);
        });
        on_click(document, "fire-btn", host, |h| {
            h.command(Command::FireMissile);
        });
        on_click(document, "home-btn", host, Host::request_exit);
        on_click(document, "resume-btn", host, |h| {
            h.command(Command::TogglePause);
        });
        on_click(document, "confirm-exit-yes", host, |h| h.answer_exit(true));
        on_click(document, "confirm-exit-no", host, |h| h.answer_exit(false));
        on_click(document, "mute-btn", host, |h| {
            h.game.toggle_mute();
        });
    }

    fn setup_settings_panel(document: &Document, host: &Shared) {
        on_click(document, "settings-btn", host, Host::open_settings);
        on_click(document, "pause-settings-btn", host, Host::open_settings);
        on_click(document, "settings-close", host, |h| {
            h.settings_open = false;
        });

        let controls = [
            ("settings-quality", "change"),
            ("settings-particles", "change"),
            ("settings-show-fps", "change"),
            ("settings-reduced-motion", "change"),
            ("settings-master-volume", "input"),
            ("settings-sfx-volume", "input"),
        ];
        for (id, event) in controls {
            let Some(el) = document.get_element_by_id(id) else {
                log::debug!("No #{id} element");
                continue;
            };
            let host = host.clone();
            listen(&el, event, move |_event: web_sys::Event| {
                host.borrow_mut().apply_settings_panel();
            });
        }
    }

    fn setup_auto_pause(window: &web_sys::Window, document: &Document, host: &Shared) {
        // Visibility change (tab switch, minimize)
        {
            let host = host.clone();
            let document_clone = document.clone();
            listen(document, "visibilitychange", move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut h = host.borrow_mut();
                    if h.game.state.phase == GamePhase::Playing {
                        h.command(Command::TogglePause);
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
        }

        // Window blur (click outside)
        {
            let host = host.clone();
            listen(window, "blur", move |_event: web_sys::Event| {
                let mut h = host.borrow_mut();
                if h.game.state.phase == GamePhase::Playing {
                    h.command(Command::TogglePause);
                    log::info!("Auto-paused (window blur)");
                }
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = web_host::run().await {
        log::error!("Startup failed: {e:#}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: the autopilot plays one session at a simulated 60 Hz
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use combo_breakout::audio::NullAudio;
    use combo_breakout::autopilot::Autopilot;
    use combo_breakout::renderer::FrameRenderer;
    use combo_breakout::sim::GameEvent;
    use combo_breakout::{GameLoop, Settings};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seconds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120);
    let rich_mode = args.any(|arg| arg == "--rich");

    let settings = Settings {
        rich_mode,
        ..Settings::default()
    };
    log::info!(
        "Combo Breakout (native) demo: {seconds}s simulated, rich mode {rich_mode}"
    );

    let mut game = GameLoop::new(settings.clone(), NullAudio::default());
    game.attach_renderer(FrameRenderer::new(&settings, 0x5EED));
    game.start();

    let mut bot = Autopilot::new();
    let frame_ms = 1000.0 / 60.0;
    let frames = seconds * 60;
    for frame in 0..frames {
        let now = frame as f64 * frame_ms;
        for command in bot.commands(&game.state) {
            game.handle_command(command, now);
        }
        game.on_animation_frame(now);

        let over = game
            .take_notices()
            .iter()
            .any(|notice| *notice == GameEvent::GameOver);
        if over {
            break;
        }
    }
    game.stop();

    let state = &game.state;
    log::info!(
        "Demo finished: phase {:?}, level {}, score {}, money {}, lives {}, {} fps",
        state.phase,
        state.bricks.level(),
        state.economy.score,
        state.economy.money,
        state.economy.lives,
        game.fps().unwrap_or(0)
    );
}
