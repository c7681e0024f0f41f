use sprout::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for warning in warnings {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(warning.to_string()).render(supports_color)
        ));
    }
    out
}
