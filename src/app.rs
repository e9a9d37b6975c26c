use eframe::{egui, App};
use egui::RichText;

use crate::config::Config;
use crate::router::{History, Route};
use crate::storage::AppState;
use crate::timers::Timers;
use crate::views::quiz::QuizView;
use crate::views::study::StudyView;
use crate::views::{self, TimerEvent, ViewCtx, BLUE, ORANGE};

/// The view currently on screen, with whatever local state it keeps.
#[derive(Debug)]
pub enum ActiveView {
    Home,
    Book(String),
    Study(StudyView),
    Quiz(QuizView),
    Profile,
}

impl ActiveView {
    fn for_route(route: &Route, state: &AppState) -> Self {
        match route {
            Route::Home => ActiveView::Home,
            Route::Book { book } => ActiveView::Book(book.clone()),
            Route::Study { book, chapter, verse } => {
                ActiveView::Study(StudyView::new(book, *chapter, *verse, state))
            }
            Route::Quiz { book, chapter_group } => ActiveView::Quiz(QuizView::new(book, *chapter_group)),
            Route::Profile => ActiveView::Profile,
        }
    }
}

pub struct SheepLingoApp {
    config: Config,
    state: AppState,
    history: History,
    view: ActiveView,
    view_timers: Timers<TimerEvent>,
    shell_timers: Timers<TimerEvent>,
    splash_scheduled: bool,
    splash_done: bool,
}

impl SheepLingoApp {
    pub fn new(config: Config, state: AppState, start: Route) -> Self {
        let view = ActiveView::for_route(&start, &state);
        let splash_done = config.splash_ms == 0;
        SheepLingoApp {
            config,
            state,
            history: History::new(start),
            view,
            view_timers: Timers::new(),
            shell_timers: Timers::new(),
            splash_scheduled: false,
            splash_done,
        }
    }

    pub fn route(&self) -> &Route {
        self.history.current()
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_splash_showing(&self) -> bool {
        !self.splash_done
    }

    pub fn navigate(&mut self, route: Route) {
        if &route == self.history.current() {
            return;
        }
        self.history.navigate(route.clone());
        self.open(&route);
    }

    pub fn go_back(&mut self) {
        if self.history.go_back() {
            let route = self.history.current().clone();
            self.open(&route);
        }
    }

    /// Switches the view for `route`. Stepping between verses of one chapter
    /// keeps the study view; anything else tears the old view down along
    /// with its pending timers.
    fn open(&mut self, route: &Route) {
        if let (ActiveView::Study(study), Route::Study { verse, .. }) = (&mut self.view, route) {
            if study.shows_chapter_of(route) {
                study.set_verse(*verse, &self.state);
                return;
            }
        }
        self.view_timers.cancel_all();
        self.view = ActiveView::for_route(route, &self.state);
    }

    /// Runs shell and view timers due at `now`, applying any navigation they request.
    pub fn tick(&mut self, now: f64) {
        if !self.splash_done {
            if !self.splash_scheduled {
                self.shell_timers.schedule(now, self.config.splash_delay(), TimerEvent::SplashDone);
                self.splash_scheduled = true;
            }
            if self.shell_timers.poll(now).contains(&TimerEvent::SplashDone) {
                tracing::debug!("splash finished");
                self.splash_done = true;
            }
            return;
        }

        let due = self.view_timers.poll(now);
        let mut navigate_to = None;
        for event in due {
            let mut ctx = ViewCtx::new(&mut self.state, &self.config, &mut self.view_timers, now);
            if let ActiveView::Quiz(quiz) = &mut self.view {
                quiz.on_timer(event, &mut ctx);
            }
            if let Some(route) = ctx.take_navigation() {
                navigate_to = Some(route);
            }
        }
        if let Some(route) = navigate_to {
            self.navigate(route);
        }
    }

    fn next_repaint(&self, now: f64) -> Option<std::time::Duration> {
        let shell = self.shell_timers.next_due_in(now);
        let view = self.view_timers.next_due_in(now);
        match (shell, view) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        let mut target = None;
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
            if ui.add_enabled(self.history.can_go_back(), egui::Button::new("\u{2190}")).clicked() {
                self.go_back();
            }
            if ui.button("\u{1F411} SheepLingo").clicked() {
                target = Some(Route::Home);
            }
            ui.label(RichText::new("Bible Study Journey").weak());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("\u{1F464} Profile").clicked() {
                    target = Some(Route::Profile);
                }
                let progress = self.state.progress();
                ui.label(RichText::new(format!("\u{2B50} {}", progress.total_xp)).strong().color(BLUE));
                ui.label(RichText::new(format!("\u{1F525} {}", progress.streak)).strong().color(ORANGE));
                let mut dark = self.state.dark_mode();
                if ui.checkbox(&mut dark, "Dark").changed() {
                    self.state.set_dark_mode(dark);
                }
            });
        });
        target
    }
}

impl App for SheepLingoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        ctx.set_visuals(if self.state.dark_mode() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.tick(now);

        if !self.splash_done {
            egui::CentralPanel::default().show(ctx, |ui| views::splash::show(ui, now));
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
            return;
        }

        let mut target = None;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            target = self.top_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut vctx = ViewCtx::new(&mut self.state, &self.config, &mut self.view_timers, now);
            match &mut self.view {
                ActiveView::Home => views::home::show(ui, &mut vctx),
                ActiveView::Book(book) => views::book::show(ui, &mut vctx, book),
                ActiveView::Study(study) => study.show(ui, &mut vctx),
                ActiveView::Quiz(quiz) => quiz.show(ui, &mut vctx),
                ActiveView::Profile => views::profile::show(ui, &mut vctx),
            }
            if let Some(route) = vctx.take_navigation() {
                target = Some(route);
            }
        });

        if let Some(route) = target {
            self.navigate(route);
        }
        if let Some(wait) = self.next_repaint(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
