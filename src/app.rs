//! Dashboard application
//!
//! Owns every piece of client state and drives one frame at a time:
//! collect the result of any in-flight request, mount or drop the
//! create-agent draft for the current route, then render. Requests run on
//! the tokio runtime and report back over a oneshot channel so the UI
//! thread never blocks.

use crate::api::{ApiClient, ApiError, AuthApi, CreateAgentRequest, ListingApi, LoginRequest, LoginResponse};
use crate::config::Config;
use crate::error::AppError;
use crate::listing::CreateAgentForm;
use crate::navigation::routes;
use crate::notice::NoticeQueue;
use crate::router::Router;
use crate::session::{SessionStore, SignInForm};
use crate::storage::{FileStorage, Storage};
use crate::ui::{render_dashboard, render_loading, render_notices, render_sign_in, DashboardAction};
use eframe::egui;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, warn};

/// Create request tagged with the form instance that issued it
struct PendingCreate {
    form_id: u64,
    rx: oneshot::Receiver<Result<(), ApiError>>,
}

/// Main application struct
/// Manages session, routing, forms and notices, and renders the UI
pub struct DashboardApp {
    runtime: Handle,
    api: Arc<ApiClient>,
    session: SessionStore,
    router: Router,
    notices: NoticeQueue,
    sign_in: SignInForm,
    pending_sign_in: Option<oneshot::Receiver<Result<LoginResponse, ApiError>>>,
    create_agent: Option<CreateAgentForm>,
    // Bumped every time a fresh create-agent form is mounted
    form_id: u64,
    pending_creates: Vec<PendingCreate>,
}

impl DashboardApp {
    /// Create the application around an initialized session
    pub fn new(config: &Config, runtime: Handle, api: Arc<ApiClient>, session: SessionStore) -> Self {
        Self {
            runtime,
            api,
            session,
            router: Router::new(routes::DASHBOARD),
            notices: NoticeQueue::new(config.ui.notice_duration()),
            sign_in: SignInForm::new(),
            pending_sign_in: None,
            create_agent: None,
            form_id: 0,
            pending_creates: Vec::new(),
        }
    }

    /// Collect the results of in-flight requests that have arrived
    fn poll_pending(&mut self) {
        if let Some(mut rx) = self.pending_sign_in.take() {
            match rx.try_recv() {
                Ok(result) => self.finish_sign_in(result),
                Err(TryRecvError::Empty) => self.pending_sign_in = Some(rx),
                Err(TryRecvError::Closed) => self.finish_sign_in(Err(ApiError::Interrupted)),
            }
        }

        let mut waiting = Vec::with_capacity(self.pending_creates.len());
        for mut pending in std::mem::take(&mut self.pending_creates) {
            match pending.rx.try_recv() {
                Ok(result) => self.finish_create_agent(pending.form_id, result),
                Err(TryRecvError::Empty) => waiting.push(pending),
                Err(TryRecvError::Closed) => {
                    self.finish_create_agent(pending.form_id, Err(ApiError::Interrupted))
                }
            }
        }
        self.pending_creates = waiting;
    }

    fn finish_sign_in(&mut self, result: Result<LoginResponse, ApiError>) {
        if self.sign_in.finish(result, &self.session, &mut self.notices) {
            self.router.push(routes::DASHBOARD);
        }
    }

    fn finish_create_agent(&mut self, form_id: u64, result: Result<(), ApiError>) {
        let issued_here = form_id == self.form_id;
        match self.create_agent.as_mut() {
            Some(form) if issued_here => {
                form.finish_submit(result, &mut self.notices, &mut self.router);
            }
            // The form that sent this request was closed; its draft is gone
            _ => match result {
                Ok(()) => info!(form_id, "Agent listing created after its form was closed"),
                Err(e) => warn!(form_id, error = %e, "Create request failed after its form was closed"),
            },
        }
    }

    /// Mount a fresh draft on the create-agent route, drop it elsewhere
    fn sync_route(&mut self) {
        if self.router.is_at(routes::CREATE_AGENT) {
            if self.create_agent.is_none() {
                self.form_id += 1;
                debug!(form_id = self.form_id, "Mounting create-agent form");
                self.create_agent = Some(CreateAgentForm::new());
            }
        } else if self.create_agent.take().is_some() {
            debug!(form_id = self.form_id, "Discarding create-agent draft");
        }
    }

    fn start_sign_in(&mut self, ctx: &egui::Context, request: LoginRequest) {
        let (tx, rx) = oneshot::channel();
        let api = Arc::clone(&self.api);
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = api.login(&request).await;
            let _ = tx.send(result);
            ctx.request_repaint();
        });
        self.pending_sign_in = Some(rx);
    }

    fn start_create_agent(&mut self, ctx: &egui::Context, request: CreateAgentRequest) {
        let (tx, rx) = oneshot::channel();
        let api = Arc::clone(&self.api);
        let token = self.session.token();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = api.create_agent(token.as_deref(), &request).await;
            let _ = tx.send(result);
            ctx.request_repaint();
        });
        self.pending_creates.push(PendingCreate {
            form_id: self.form_id,
            rx,
        });
    }

    fn has_pending_create(&self) -> bool {
        self.pending_creates
            .iter()
            .any(|pending| pending.form_id == self.form_id)
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: DashboardAction) {
        match action {
            DashboardAction::None => {}
            DashboardAction::Navigate(href) => self.router.push(href),
            DashboardAction::SubmitListing => {
                // Requests left behind by closed forms do not block this one
                if self.has_pending_create() {
                    debug!(form_id = self.form_id, "Create request already in flight");
                    return;
                }
                let request = self
                    .create_agent
                    .as_mut()
                    .and_then(|form| form.begin_submit(&mut self.notices));
                if let Some(request) = request {
                    self.start_create_agent(ctx, request);
                }
            }
            DashboardAction::Logout => {
                self.session.logout();
                self.router.push(routes::DASHBOARD);
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();
        self.sync_route();

        let session = self.session.snapshot();
        if !session.is_initialized {
            render_loading(ctx);
        } else if let Some(user) = session.user.as_ref().filter(|_| session.is_authenticated()) {
            let action = render_dashboard(
                ctx,
                user,
                self.router.current(),
                self.create_agent.as_mut(),
            );
            self.handle_action(ctx, action);
        } else {
            let mut submit = false;
            egui::CentralPanel::default().show(ctx, |ui| {
                submit = render_sign_in(ui, &mut self.sign_in, session.is_loading);
            });
            if submit && self.pending_sign_in.is_none() {
                if let Some(request) = self.sign_in.begin(&self.session, &mut self.notices) {
                    self.start_sign_in(ctx, request);
                }
            }
        }

        render_notices(ctx, &mut self.notices);
    }
}

/// Start the client: rehydrate the session, open the window, tear down
///
/// Blocks until the window is closed.
pub fn run(config: Config) -> Result<(), AppError> {
    let runtime = tokio::runtime::Runtime::new()?;

    let storage_path = config.storage.storage_path();
    info!(path = %storage_path.display(), "Using session storage");
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(storage_path));

    let (session, outcome) = runtime.block_on(SessionStore::init(storage));
    info!(outcome = ?outcome, "Session ready");

    let api = Arc::new(ApiClient::new(&config.api)?);
    info!(base_url = %api.base_url(), "Marketplace API client ready");

    let app = DashboardApp::new(&config, runtime.handle().clone(), api, session.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Agent Marketplace")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Agent Marketplace",
        options,
        Box::new(|_cc| Box::new(app)),
    );

    session.teardown();
    result.map_err(AppError::from)
}
