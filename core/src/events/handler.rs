use super::PluginSignal;

/// Trait for systems that react to plugin signals.
/// Implement this for overlays, loggers, etc.
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: &PluginSignal);

    /// Handle multiple signals (default implementation calls handle_signal for each)
    fn handle_signals(&mut self, signals: &[PluginSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}
