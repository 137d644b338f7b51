use std::time::Instant;

use zeroize::Zeroizing;

use super::form::Form;
use crate::pass::CharClass;
use crate::pass::strength::{BAR_COUNT, Strength};
use crate::rand::entropy_source;
use crate::terminal::{
    BOLD, DIM, GREEN, ORANGE, RED, RESET, YELLOW, box_bottom, box_line, box_line_center,
    box_opt, box_rule, box_split, box_top, meter, slider_bar,
};

const SLIDER_WIDTH: usize = 56;
const PLACEHOLDER: &str = "P4$5W0rD!";

fn strength_color(strength: Strength) -> &'static str {
    match strength {
        Strength::TooWeak => RED,
        Strength::Weak => ORANGE,
        Strength::Medium => YELLOW,
        Strength::Strong => GREEN,
    }
}

fn checkbox(checked: bool) -> String {
    if checked {
        format!("{GREEN}[x]{RESET}")
    } else {
        "[ ]".to_string()
    }
}

pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        box_top("Passgen"),
        box_line_center("Password generator"),
        box_line(""),
        box_line("USAGE:"),
        box_line("  passgen [OPTIONS]"),
        box_line(""),
        box_line("OPTIONS:"),
    ];
    lines.extend(box_opt("  -l, --length <N>", "Initial length, clamped to 0-20 (default: 10)"));
    let classes: Vec<String> = CharClass::ALL.iter().map(ToString::to_string).collect();
    lines.extend(box_opt(
        "      --only <LIST>",
        &format!("Enable only these classes: {}", classes.join(", ")),
    ));
    lines.extend(box_opt("      --no-uppercase", "Start with uppercase letters off"));
    lines.extend(box_opt("      --no-lowercase", "Start with lowercase letters off"));
    lines.extend(box_opt("      --no-numbers", "Start with numbers off"));
    lines.extend(box_opt("      --no-symbols", "Start with symbols off"));
    lines.extend(box_opt("  -g, --generate", "Generate a password on start"));
    lines.extend(box_opt("  -h, --help", "Show this help"));
    lines.extend(box_opt("  -v, --version", "Show version"));
    lines.push(box_line(""));
    lines.push(box_line("KEYS:"));
    lines.extend(box_opt("  Left / Right", "Change length"));
    lines.extend(box_opt("  1-4 or u o n s", "Toggle a character class"));
    lines.extend(box_opt("  Enter / g", "Generate"));
    lines.extend(box_opt("  c / y", "Copy to clipboard"));
    lines.extend(box_opt("  ?", "Toggle this help"));
    lines.extend(box_opt("  Esc / q", "Quit"));
    lines.push(box_line(""));
    lines.push(box_line(&format!(
        "{DIM}Not for high-value secrets: uses a general-purpose RNG.{RESET}"
    )));
    lines.push(box_bottom());
    lines
}

pub fn print_help() {
    for line in help_lines() {
        println!("{line}");
    }
}

/// Draw the whole widget as one frame. The frame holds the password, so it
/// and every intermediate line are wiped on drop.
pub fn render(form: &Form, show_help: bool, now: Instant) -> Zeroizing<String> {
    if show_help {
        return Zeroizing::new(help_lines().join("\n"));
    }

    let mut lines = Zeroizing::new(vec![box_top("Password Generator")]);

    let copied = if form.feedback().is_visible(now) {
        format!("{GREEN}COPIED{RESET}")
    } else {
        String::new()
    };
    let shown = Zeroizing::new(match form.output() {
        Some(output) => format!("{BOLD}{}{RESET}", output.password.as_str()),
        None => format!("{DIM}{PLACEHOLDER}{RESET}"),
    });
    lines.push(box_split(&shown, &copied));
    lines.push(box_rule());

    lines.push(box_split(
        "Character Length",
        &format!("{GREEN}{BOLD}{}{RESET}", form.slider.value()),
    ));
    lines.push(box_line(&slider_bar(form.slider.fill_percent(), SLIDER_WIDTH)));
    lines.push(box_line(""));

    for (i, class) in CharClass::ALL.into_iter().enumerate() {
        lines.push(box_line(&format!(
            "{} {}  {DIM}({}){RESET}",
            checkbox(form.options.is_enabled(class)),
            class.label(),
            i + 1
        )));
    }
    lines.push(box_line(""));

    let (label, bars) = match form.output() {
        Some(output) => {
            let strength = output.strength;
            (
                format!("{BOLD}{}{RESET}", strength.to_string().to_uppercase()),
                meter(strength.bars(), BAR_COUNT, strength_color(strength)),
            )
        }
        None => (String::new(), meter(0, BAR_COUNT, RESET)),
    };
    lines.push(box_split(&format!("{DIM}STRENGTH{RESET}"), &format!("{label}  {bars}")));
    lines.push(box_line(&format!(
        "{DIM}Entropy: {:.1} bits  Source: {}{RESET}",
        form.entropy_bits(),
        entropy_source()
    )));
    lines.push(box_rule());
    lines.push(box_line_center(&format!(
        "{DIM}[Enter] Generate  [c] Copy  [?] Help  [q] Quit{RESET}"
    )));
    lines.push(box_bottom());

    Zeroizing::new(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::GenerationOptions;
    use crate::rand::Scripted;
    use crate::settings::Settings;
    use crate::terminal::{BOX_WIDTH, console_width};
    use zeroize::Zeroize;

    fn form(length: usize) -> Form {
        Form::new(&Settings {
            initial_length: length,
            options: GenerationOptions {
                uppercase: true,
                ..GenerationOptions::none()
            },
            ..Settings::default()
        })
    }

    #[test]
    fn cleared_form_shows_placeholder_and_no_label() {
        let frame = render(&form(8), false, Instant::now());
        assert!(frame.contains(PLACEHOLDER));
        assert!(!frame.contains("WEAK"));
        assert!(!frame.contains('█'));
    }

    #[test]
    fn rendered_form_shows_password_and_strength() {
        let mut form = form(8);
        form.submit(&mut Scripted::new(&[0]));
        let frame = render(&form, false, Instant::now());

        assert!(frame.contains("AAAAAAAA"));
        assert!(frame.contains("WEAK"));
        assert!(!frame.contains("TOO WEAK"));
        assert_eq!(frame.matches('█').count(), 2);
    }

    #[test]
    fn frame_with_password_is_wiped_on_drop() {
        let mut form = form(12);
        form.submit(&mut Scripted::new(&[7]));

        let mut frame: Zeroizing<String> = render(&form, false, Instant::now());
        assert!(frame.contains("HHHHHHHHHHHH"));

        frame.zeroize();
        assert!(frame.is_empty());
    }

    #[test]
    fn every_line_fits_the_box() {
        let frame = render(&form(20), false, Instant::now());
        for line in frame.lines() {
            assert_eq!(console_width(line), BOX_WIDTH, "{line:?}");
        }
    }

    #[test]
    fn copied_marker_follows_feedback() {
        struct Accept;
        impl crate::clipboard::ClipboardSink for Accept {
            fn set_text(&mut self, _: &str) -> crate::error::Result<()> {
                Ok(())
            }
        }

        let mut form = form(8);
        form.submit(&mut Scripted::new(&[3]));
        let now = Instant::now();
        assert!(!render(&form, false, now).contains("COPIED"));

        form.copy(&mut Accept, now);
        assert!(render(&form, false, now).contains("COPIED"));
        let later = now + std::time::Duration::from_secs(2);
        assert!(!render(&form, false, later).contains("COPIED"));
    }

    #[test]
    fn help_lists_every_class_name() {
        let help = help_lines().join("\n");
        assert!(help.contains("lowercase, numbers,"));
        for class in CharClass::ALL {
            let name = class.to_string();
            assert!(help.contains(&name), "{name}");
            assert_eq!(CharClass::from_name(&name), Some(class));
        }
    }

    #[test]
    fn help_overlay_replaces_widget() {
        let frame = render(&form(8), true, Instant::now());
        assert!(frame.contains("USAGE:"));
        assert!(!frame.contains(PLACEHOLDER));
    }
}
