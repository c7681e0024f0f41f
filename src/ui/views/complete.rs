use sprout::ScaffoldReport;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_complete(
    report: &ScaffoldReport,
    package_manager: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} Created {} at {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(report.project_name.as_str())
            .bold()
            .render(supports_color),
        report.project_path.display()
    ));

    out.push('\n');
    out.push_str("Next steps:\n");

    let mut steps = vec![format!("cd {}", report.project_name)];
    if !report.installed {
        steps.push(format!("{} install", package_manager));
    }
    steps.push(format!("{} run dev", package_manager));

    for step in steps {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim(step).render(supports_color)
        ));
    }
    out
}
