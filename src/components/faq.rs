use log::debug;
use yew::prelude::*;
use web_sys::MouseEvent;

use crate::catalog::{FaqEntry, FAQ_ENTRIES};
use crate::components::icons::{Icon, IconView};

/// Single-open accordion state. At most one entry is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(self, index: usize) -> Self {
        let open = if self.open == Some(index) { None } else { Some(index) };
        Self { open }
    }
}

/// Inline cap for an answer panel. An open panel takes its measured content
/// height so the transition has a real target; unmeasured, it is uncapped.
fn answer_style(open: bool, measured_px: Option<i32>) -> String {
    match (open, measured_px) {
        (false, _) => "max-height: 0px;".to_string(),
        (true, Some(px)) if px > 0 => format!("max-height: {}px;", px),
        (true, _) => "max-height: none;".to_string(),
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let answer_ref = use_node_ref();
    let measured = answer_ref
        .cast::<web_sys::Element>()
        .map(|answer| answer.scroll_height());
    let style = answer_style(props.open, measured);

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()} aria-expanded={props.open.to_string()}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">
                    <IconView icon={Icon::Plus} />
                </span>
            </button>
            <div class="faq-answer" ref={answer_ref} {style}>
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <section id="faq" class="faq-section">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Common Questions"}</h2>
                    <p>{"Everything you need to know about ordering gas on WhatsApp"}</p>
                </div>
                <div class="faq-list">
                    { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| {
                        let on_toggle = {
                            let accordion = accordion.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                let next = accordion.toggle(index);
                                debug!("FAQ open entry: {:?}", next.open_index());
                                accordion.set(next);
                            })
                        };
                        html! {
                            <FaqItem key={index} entry={entry.clone()} open={accordion.is_open(index)} {on_toggle} />
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .faq-list {
                    max-width: 760px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .faq-item {
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                    background: white;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.1rem 1.4rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    text-align: left;
                    font-family: 'Montserrat', sans-serif;
                    font-weight: 600;
                    font-size: 1rem;
                    color: #0f172a;
                }
                .toggle-icon .icon {
                    width: 20px;
                    height: 20px;
                    color: #E31679;
                    transition: transform 0.2s ease;
                }
                .faq-item.open .toggle-icon .icon {
                    transform: rotate(45deg);
                }
                .faq-answer {
                    overflow: hidden;
                    opacity: 0;
                    transition: max-height 0.25s ease, opacity 0.25s ease;
                }
                .faq-item.open .faq-answer {
                    opacity: 1;
                }
                .faq-answer p {
                    margin: 0;
                    padding: 0 1.4rem 1.2rem;
                    color: #64748b;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(accordion: &Accordion, len: usize) -> usize {
        (0..len).filter(|i| accordion.is_open(*i)).count()
    }

    #[test]
    fn starts_closed() {
        let accordion = Accordion::default();
        assert_eq!(accordion.open_index(), None);
        assert_eq!(open_count(&accordion, 6), 0);
    }

    #[test]
    fn opening_another_closes_the_first() {
        let accordion = Accordion::default().toggle(1);
        assert!(accordion.is_open(1));
        let accordion = accordion.toggle(4);
        assert!(accordion.is_open(4));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn toggling_the_open_entry_closes_it() {
        let accordion = Accordion::default().toggle(2).toggle(2);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn open_answer_takes_its_measured_height() {
        assert_eq!(answer_style(false, None), "max-height: 0px;");
        assert_eq!(answer_style(false, Some(640)), "max-height: 0px;");
        // long answers are not clipped to a fixed cap
        assert_eq!(answer_style(true, Some(640)), "max-height: 640px;");
        assert_eq!(answer_style(true, None), "max-height: none;");
        assert_eq!(answer_style(true, Some(0)), "max-height: none;");
    }

    #[test]
    fn never_more_than_one_open() {
        // every toggle sequence of length 4 over 6 entries
        let len: usize = 6;
        for seq in 0..len.pow(4) {
            let mut accordion = Accordion::default();
            let mut rest = seq;
            for _ in 0..4 {
                let index = rest % len;
                rest /= len;
                let before = accordion;
                accordion = accordion.toggle(index);
                assert!(open_count(&accordion, len) <= 1);
                if before.is_open(index) {
                    assert_eq!(accordion.open_index(), None);
                } else {
                    assert_eq!(accordion.open_index(), Some(index));
                }
            }
        }
    }
}
