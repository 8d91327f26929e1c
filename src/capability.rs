//! Hooks into the surrounding actuation-permission subsystem.
//!
//! The gateway does not own actuation safety. It only tells the global
//! safety layer when bridging starts or stops, and clears the
//! controls-allowed flag on init.

/// Capability toggles provided by the global safety layer.
pub trait SafetyCapabilities {
    /// Allow every outbound message class. Called when bridging starts.
    fn enable_all(&mut self);

    /// Forbid every outbound message class. Called when bridging stops.
    fn disable_all(&mut self);

    /// Set the process-wide "controls allowed" actuation flag.
    fn set_controls_allowed(&mut self, allowed: bool);
}

impl<T: SafetyCapabilities + ?Sized> SafetyCapabilities for &mut T {
    fn enable_all(&mut self) {
        (**self).enable_all()
    }

    fn disable_all(&mut self) {
        (**self).disable_all()
    }

    fn set_controls_allowed(&mut self, allowed: bool) {
        (**self).set_controls_allowed(allowed)
    }
}
