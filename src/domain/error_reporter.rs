/// Presents errors to the person in front of the panel, e.g. as a dialog.
pub trait ErrorReporter {
    fn report_error(&self, title: &str, message: &str);
}
