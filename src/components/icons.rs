use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Clock,
    Smartphone,
    Zap,
    ShieldCheck,
    Truck,
    History,
    ChevronRight,
    CheckCircle,
    CircleAlert,
    Plus,
    Loader,
    WhatsApp,
}

const WHATSAPP_PATH: &str = "M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413z";

impl Icon {
    /// Stroke paths for the outline icons. `WhatsApp` is filled and handled separately.
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Clock => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20", "M12 6v6l4 2"],
            Icon::Smartphone => &["M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z", "M12 18h.01"],
            Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Icon::ShieldCheck => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10", "m9 12 2 2 4-4"],
            Icon::Truck => &[
                "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
                "M15 18H9",
                "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14",
                "M17 16a2 2 0 1 0 0 4a2 2 0 1 0 0-4",
                "M7 16a2 2 0 1 0 0 4a2 2 0 1 0 0-4",
            ],
            Icon::History => &["M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8", "M3 3v5h5", "M12 7v5l4 2"],
            Icon::ChevronRight => &["m9 18 6-6-6-6"],
            Icon::CheckCircle => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20", "m9 12 2 2 4-4"],
            Icon::CircleAlert => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20", "M12 8v4", "M12 16h.01"],
            Icon::Plus => &["M5 12h14", "M12 5v14"],
            Icon::Loader => &["M21 12a9 9 0 1 1-6.219-8.56"],
            Icon::WhatsApp => &[],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or(AttrValue::Static("icon"))]
    pub class: AttrValue,
}

fn svg_classes(class: &str, icon: Icon) -> Classes {
    classes!(class.to_string(), (icon == Icon::Loader).then(|| "spin"))
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    let class = svg_classes(&props.class, props.icon);
    if props.icon == Icon::WhatsApp {
        return html! {
            <svg {class} viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d={WHATSAPP_PATH} />
            </svg>
        };
    }

    html! {
        <svg
            {class}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_loader_spins() {
        assert_eq!(svg_classes("icon", Icon::Loader), classes!("icon", "spin"));
        assert_eq!(svg_classes("toast-icon", Icon::CheckCircle), classes!("toast-icon"));
        assert_eq!(svg_classes("icon", Icon::WhatsApp), classes!("icon"));
    }

    #[test]
    fn outline_icons_have_paths() {
        let outline = [
            Icon::Clock,
            Icon::Smartphone,
            Icon::Zap,
            Icon::ShieldCheck,
            Icon::Truck,
            Icon::History,
            Icon::ChevronRight,
            Icon::CheckCircle,
            Icon::CircleAlert,
            Icon::Plus,
            Icon::Loader,
        ];
        for icon in outline {
            assert!(!icon.paths().is_empty(), "{:?} has no paths", icon);
        }
        assert!(Icon::WhatsApp.paths().is_empty());
    }
}
