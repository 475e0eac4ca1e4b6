//! Main application state and update loop

use eframe::egui;

use solpair_core::{ActionPhase, PairingCode, RelayError, StatusOutcome, StatusReport};

use crate::bridge::{RelayBridge, ResultSlot};
use crate::state::{
    MessageFormState, MessageOutcome, StatusPanelState, TransferFormState, TransferOutcome,
};
use crate::ui;

/// Available tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Message,
    Transaction,
}

/// The main application state
pub struct App {
    active_tab: Tab,
    bridge: RelayBridge,
    message_form: MessageFormState,
    transfer_form: TransferFormState,
    /// Fetched once at startup; the submit path reports
    /// `Blockhash not ready` until it lands.
    blockhash: Option<String>,
    blockhash_generation: u64,
    blockhash_slot: ResultSlot<Result<String, RelayError>>,
    message_submit_slot: ResultSlot<Result<(), RelayError>>,
    transfer_submit_slot: ResultSlot<Result<(), RelayError>>,
    message_status_slot: ResultSlot<Result<StatusOutcome, RelayError>>,
    transfer_status_slot: ResultSlot<Result<StatusOutcome, RelayError>>,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, bridge: RelayBridge) -> Self {
        let app = Self {
            active_tab: Tab::default(),
            bridge,
            message_form: MessageFormState::default(),
            transfer_form: TransferFormState::default(),
            blockhash: None,
            blockhash_generation: 1,
            blockhash_slot: ResultSlot::default(),
            message_submit_slot: ResultSlot::default(),
            transfer_submit_slot: ResultSlot::default(),
            message_status_slot: ResultSlot::default(),
            transfer_status_slot: ResultSlot::default(),
        };
        app.bridge
            .fetch_blockhash(app.blockhash_slot.clone(), app.blockhash_generation);
        app
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        self.drain_results();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("🔗 Solpair")
                        .size(22.0)
                        .color(egui::Color32::from_rgb(0, 212, 170)),
                );
                ui.add_space(30.0);
                ui.separator();
                ui.add_space(10.0);
                ui.selectable_value(&mut self.active_tab, Tab::Message, "💬 Message");
                ui.selectable_value(&mut self.active_tab, Tab::Transaction, "📝 Transaction");
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                match self.active_tab {
                    Tab::Message => self.render_message_tab(ui),
                    Tab::Transaction => self.render_transaction_tab(ui),
                }
                ui.add_space(20.0);
            });
        });

        if self.anything_in_flight() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

impl App {
    fn anything_in_flight(&self) -> bool {
        self.message_form.submit_phase.is_in_flight()
            || self.transfer_form.submit_phase.is_in_flight()
            || self.message_form.status.phase.is_in_flight()
            || self.transfer_form.status.phase.is_in_flight()
    }

    fn drain_results(&mut self) {
        if let Some(result) = self.blockhash_slot.take_if_current(self.blockhash_generation) {
            match result {
                Ok(hash) => {
                    tracing::info!("fetched recent blockhash");
                    self.blockhash = Some(hash);
                }
                Err(e) => tracing::warn!("blockhash fetch failed: {e}"),
            }
        }

        if let Some(result) = self
            .message_submit_slot
            .take_if_current(self.message_form.submit_generation)
        {
            let (phase, outcome) = match result {
                Ok(()) => (ActionPhase::Succeeded, MessageOutcome::Success),
                Err(RelayError::InvalidCode) => (ActionPhase::Failed, MessageOutcome::InvalidCode),
                Err(_) => (ActionPhase::Failed, MessageOutcome::Failed),
            };
            self.message_form.submit_phase = phase;
            self.message_form.outcome = Some(outcome);
        }

        if let Some(result) = self
            .transfer_submit_slot
            .take_if_current(self.transfer_form.submit_generation)
        {
            let (phase, outcome) = match result {
                Ok(()) => (ActionPhase::Succeeded, TransferOutcome::Success),
                Err(e) => (ActionPhase::Failed, TransferOutcome::Failed(e.to_string())),
            };
            self.transfer_form.submit_phase = phase;
            self.transfer_form.outcome = Some(outcome);
        }

        drain_status_panel(&self.message_status_slot, &mut self.message_form.status);
        drain_status_panel(&self.transfer_status_slot, &mut self.transfer_form.status);
    }

    // =========================================================================
    // MESSAGE TAB
    // =========================================================================

    fn render_message_tab(&mut self, ui: &mut egui::Ui) {
        ui::styled_heading(ui, "Sign Message");
        ui.label("Send a free-text message to your paired wallet for signing.");
        ui.add_space(15.0);

        ui.horizontal(|ui| {
            ui.label("Message:");
            ui::text_input(ui, &mut self.message_form.message, "Enter message", 320.0);
        });
        ui.horizontal(|ui| {
            ui.label("Code:");
            ui::text_input(ui, &mut self.message_form.code, "8-digit code", 140.0);
        });
        ui.add_space(8.0);

        let in_flight = self.message_form.submit_phase.is_in_flight();
        let can_submit =
            !in_flight && !self.message_form.message.is_empty() && !self.message_form.code.is_empty();
        let label = if in_flight { "Submitting…" } else { "Submit" };
        if ui.add_enabled(can_submit, egui::Button::new(label)).clicked() {
            self.message_form.outcome = None;
            self.message_form.submit_phase = ActionPhase::InFlight;
            self.message_form.submit_generation += 1;
            self.bridge.submit_message(
                self.message_form.code.clone(),
                self.message_form.message.clone(),
                self.message_submit_slot.clone(),
                self.message_form.submit_generation,
            );
        }

        match self.message_form.outcome {
            Some(MessageOutcome::Success) => {
                ui::success_label(ui, "Check your wallet to sign the message.")
            }
            Some(MessageOutcome::InvalidCode) => {
                ui::error_label(ui, "Code must be exactly 8 digits.")
            }
            Some(MessageOutcome::Failed) => ui::error_label(ui, "Failed to sign message."),
            None => {}
        }

        let code = self.message_form.code.clone();
        render_status_panel(
            ui,
            &self.bridge,
            &code,
            &mut self.message_form.status,
            &self.message_status_slot,
        );
    }

    // =========================================================================
    // TRANSACTION TAB
    // =========================================================================

    fn render_transaction_tab(&mut self, ui: &mut egui::Ui) {
        ui::styled_heading(ui, "Send Transaction");
        ui.label("Prepare an unsigned transfer and send it to your paired wallet for signing.");
        ui.add_space(15.0);

        ui.horizontal(|ui| {
            ui.label("Amount (SOL):");
            ui::text_input(ui, &mut self.transfer_form.amount, "0.0", 140.0);
        });
        ui.horizontal(|ui| {
            ui.label("Recipient:");
            ui::text_input(
                ui,
                &mut self.transfer_form.recipient,
                "Recipient wallet address",
                320.0,
            );
        });
        ui.horizontal(|ui| {
            ui.label("Code:");
            ui::text_input(ui, &mut self.transfer_form.code, "8-digit code", 140.0);
        });

        if self.blockhash.is_none() {
            ui.label(egui::RichText::new("Fetching recent blockhash…").weak().small());
        }
        ui.add_space(8.0);

        let in_flight = self.transfer_form.submit_phase.is_in_flight();
        let code_ok = PairingCode::parse(&self.transfer_form.code).is_ok();
        let can_submit = !in_flight && !self.transfer_form.recipient.is_empty() && code_ok;
        let label = if in_flight {
            "Submitting…"
        } else {
            "Submit Transaction"
        };
        if ui.add_enabled(can_submit, egui::Button::new(label)).clicked() {
            self.transfer_form.outcome = None;
            self.transfer_form.submit_generation += 1;

            let amount_text = self.transfer_form.amount.trim();
            let amount = if amount_text.is_empty() {
                Ok(0.0)
            } else {
                amount_text.parse::<f64>()
            };
            match amount {
                Ok(amount) => {
                    self.transfer_form.submit_phase = ActionPhase::InFlight;
                    self.bridge.submit_transfer(
                        self.transfer_form.code.clone(),
                        self.transfer_form.recipient.clone(),
                        amount,
                        self.blockhash.clone(),
                        self.transfer_submit_slot.clone(),
                        self.transfer_form.submit_generation,
                    );
                }
                Err(_) => {
                    self.transfer_form.submit_phase = ActionPhase::Failed;
                    self.transfer_form.outcome = Some(TransferOutcome::Failed(format!(
                        "Invalid amount: {amount_text}"
                    )));
                }
            }
        }

        match &self.transfer_form.outcome {
            Some(TransferOutcome::Success) => {
                ui::success_label(ui, "Transaction prepared and sent for signing!")
            }
            Some(TransferOutcome::Failed(text)) => ui::error_label(ui, text),
            None => {}
        }

        let code = self.transfer_form.code.clone();
        render_status_panel(
            ui,
            &self.bridge,
            &code,
            &mut self.transfer_form.status,
            &self.transfer_status_slot,
        );
    }
}

fn drain_status_panel(
    slot: &ResultSlot<Result<StatusOutcome, RelayError>>,
    panel: &mut StatusPanelState,
) {
    if let Some(result) = slot.take_if_current(panel.generation) {
        match result {
            Ok(outcome) => {
                panel.phase = ActionPhase::Succeeded;
                panel.result = Some(outcome);
            }
            Err(e) => {
                tracing::debug!("status fetch failed: {e}");
                panel.phase = ActionPhase::Failed;
                panel.error = Some("Could not fetch status.".to_owned());
            }
        }
    }
}

fn render_status_panel(
    ui: &mut egui::Ui,
    bridge: &RelayBridge,
    code: &str,
    panel: &mut StatusPanelState,
    slot: &ResultSlot<Result<StatusOutcome, RelayError>>,
) {
    ui::section_header(ui, "Relay Status");

    let in_flight = panel.phase.is_in_flight();
    let can_check = !code.is_empty() && !in_flight;
    let label = if in_flight { "Checking…" } else { "Check Status" };
    if ui.add_enabled(can_check, egui::Button::new(label)).clicked() {
        panel.clear();
        panel.phase = ActionPhase::InFlight;
        panel.generation += 1;
        bridge.check_status(code.to_owned(), slot.clone(), panel.generation);
    }

    if let Some(error) = &panel.error {
        ui::error_label(ui, error);
    }

    match &panel.result {
        Some(StatusOutcome::Raw(raw)) => {
            ui.label(egui::RichText::new(raw).monospace());
        }
        Some(StatusOutcome::Report(report)) => render_status_report(ui, report),
        None => {}
    }
}

fn render_status_report(ui: &mut egui::Ui, report: &StatusReport) {
    if let Some(error) = &report.error {
        ui::error_label(ui, error);
        return;
    }

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Status:").strong());
        ui.label(&report.status);
    });
    if let Some(expires_at) = &report.expires_at {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Expires:").strong());
            ui.label(expires_at);
        });
    }
    if let Some(signed_message) = &report.signed_message {
        if ui::labeled_field_with_copy(ui, "Signed message", signed_message) {
            ui::copy_to_clipboard(signed_message);
        }
    }
    if let Some(tx_signature) = &report.tx_signature {
        if ui::labeled_field_with_copy(ui, "Transaction signature", tx_signature) {
            ui::copy_to_clipboard(tx_signature);
        }
        if ui.link("View on explorer").clicked() {
            ui::open_url_new_tab(&ui::explorer_tx_url(tx_signature));
        }
    }
}
