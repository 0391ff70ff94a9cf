use yew::prelude::*;

/// Lucide Icons - 清晰的线性 icon 系统
/// SVG 路径来自 <https://lucide.dev>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    // Actions
    Plus,
    Pencil,
    Trash,
    X,

    // Content
    FileText,
    Image,

    // Feedback
    AlertTriangle,
    CheckCircle,
}

impl IconName {
    /// 获取 Lucide icon 的 SVG path 数据
    pub fn path(&self) -> &'static str {
        match self {
            IconName::Plus => "M12 5v14M5 12h14",
            IconName::Pencil => "M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z",
            IconName::Trash => {
                "M3 6h18M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 \
                 2v2"
            },
            IconName::X => "M18 6 6 18M6 6l12 12",

            IconName::FileText => {
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8zM14 2v6h6M16 13H8M16 \
                 17H8M10 9H8"
            },
            IconName::Image => {
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zM8.5 10a1.5 \
                 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3zM21 15l-5-5L5 21"
            },

            IconName::AlertTriangle => {
                "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3ZM12 \
                 9v4M12 17h.01"
            },
            IconName::CheckCircle => "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4 12 14.01l-3-3",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };

    html! {
        <svg
            class={classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "shrink-0",
                class.clone()
            )}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d={name.path()} />
        </svg>
    }
}

/// Icon 按钮组件 - 行内操作（编辑 / 删除）
#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub icon: IconName,

    pub label: AttrValue,

    #[prop_or(18)]
    pub size: u32,

    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,

    #[prop_or_default]
    pub danger: bool,

    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    let IconButtonProps {
        icon,
        label,
        size,
        onclick,
        danger,
        disabled,
    } = props;

    let mut button_class = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[36px]",
        "min-h-[36px]",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "transition-all",
        "duration-100",
        "hover:bg-[var(--surface-alt)]",
        "disabled:opacity-40",
        "disabled:cursor-not-allowed"
    );
    if *danger {
        button_class.push(classes!("text-red-600", "hover:text-red-700", "dark:text-red-300"));
    } else {
        button_class.push(classes!("text-[var(--text)]", "hover:text-[var(--primary)]"));
    }

    html! {
        <button
            class={button_class}
            onclick={onclick}
            disabled={*disabled}
            type="button"
            title={label.clone()}
            aria-label={label.clone()}
        >
            <Icon name={*icon} size={*size} />
        </button>
    }
}
