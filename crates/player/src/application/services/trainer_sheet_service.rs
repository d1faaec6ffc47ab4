//! Trainer Sheet Service - Application service for the Trainer form
//!
//! Prefills the form from storage, recomputes the derived vitals while the
//! user edits, and validates and persists a submitted form.

use pokerole_domain::{
    derive_trainer_vitals, validate_trainer, Trainer, TrainerInput, TrainerVitals,
};

use crate::application::services::SheetStorage;
use crate::application::SheetError;
use crate::ports::outbound::StorageProvider;

/// Trainer service for the single stored Trainer sheet
#[derive(Clone)]
pub struct TrainerSheetService<S: StorageProvider> {
    storage: SheetStorage<S>,
}

impl<S: StorageProvider> TrainerSheetService<S> {
    pub fn new(storage: SheetStorage<S>) -> Self {
        Self { storage }
    }

    /// The stored Trainer, if any
    pub fn current(&self) -> Option<Trainer> {
        self.storage.load_trainer()
    }

    /// Form defaults: the stored Trainer, or a blank sheet.
    pub fn initial_input(&self) -> TrainerInput {
        self.storage
            .load_trainer()
            .map(|trainer| TrainerInput::from(&trainer))
            .unwrap_or_default()
    }

    /// Vitals to display after vitality or insight changes. Nothing is saved.
    pub fn on_attributes_changed(&self, vitality: u32, insight: u32) -> TrainerVitals {
        derive_trainer_vitals(vitality, insight)
    }

    /// Validate and store a submitted Trainer form.
    ///
    /// The stored record is replaced wholesale. When the form carries no id or
    /// the stored one, the stored id and `party` / `box` lists are kept, since
    /// this form does not edit them. A form with another id starts with empty
    /// lists. On validation failure nothing is written.
    pub fn submit(&self, input: &TrainerInput) -> Result<Trainer, SheetError> {
        let mut trainer = validate_trainer(input).map_err(|errors| {
            tracing::debug!(fields = errors.len(), "Trainer form rejected");
            SheetError::from(errors)
        })?;

        if let Some(stored) = self.storage.load_trainer() {
            if input.id.is_none() || input.id == Some(stored.id) {
                trainer.id = stored.id;
                trainer.party = stored.party;
                trainer.pc_box = stored.pc_box;
            } else {
                tracing::debug!(
                    stored_id = %stored.id,
                    "Replacing stored trainer with a different sheet"
                );
            }
        }

        self.storage.save_trainer(&trainer)?;
        tracing::info!(trainer_id = %trainer.id, "Trainer sheet submitted");
        Ok(trainer)
    }
}
