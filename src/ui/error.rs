use sprout::SproutError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render a failure for stderr: the error line plus an optional fix hint.
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("{:#}", err)).render(supports_color)
    );

    if let Some(hint) = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<SproutError>())
        .and_then(fix_hint)
    {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }

    out
}

fn fix_hint(err: &SproutError) -> Option<String> {
    match err {
        SproutError::DirectoryNotEmpty { .. } => {
            Some("Choose another project name or empty the directory first.".to_string())
        }
        SproutError::MissingDependency { tool } => Some(format!(
            "Install {} and make sure it is on your PATH.",
            tool
        )),
        SproutError::UnsupportedRuntime { required, .. } => Some(format!(
            "Upgrade Node.js to version {} or newer (https://nodejs.org).",
            required
        )),
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        }));
    }

    eprint!("{}", format_error(err, ui.color, ui.unicode));
}
