use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 16,
            SpinnerSize::Medium => 40,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    #[prop_or(AttrValue::Static("Loading..."))]
    pub label: AttrValue,
    /// Show the label next to the spinner instead of only to screen readers.
    #[prop_or(false)]
    pub inline_label: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());
    let padding = match props.size {
        SpinnerSize::Small => "p-0",
        SpinnerSize::Medium => "p-6",
    };

    html! {
        <span
            class={classes!("inline-flex", "items-center", "justify-center", "gap-2", padding)}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <span
                style={spinner_style}
                class={classes!(
                    "inline-block",
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-[3px]",
                    "border-transparent",
                    "bg-[conic-gradient(var(--primary),transparent)]",
                    "[mask:radial-gradient(farthest-side,transparent_calc(100%-4px),#000_calc(100%-3px))]",
                    "animate-[spin_0.9s_linear_infinite]"
                )}
            />
            if props.inline_label {
                <span class="text-sm text-[var(--muted)]">{ props.label.clone() }</span>
            } else {
                <span class={classes!("sr-only")}>{ props.label.clone() }</span>
            }
        </span>
    }
}
