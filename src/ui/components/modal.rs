// SPDX-License-Identifier: MPL-2.0
//! Modal overlay: a centered panel above a dimmed, click-absorbing backdrop.

use crate::ui::styles;
use iced::widget::{center, mouse_area, opaque, Stack};
use iced::Element;

/// Layers `dialog` over `base`. Clicking the backdrop emits `on_dismiss`.
/// With no dialog, `base` is returned untouched.
pub fn overlay<'a, Message>(
    base: Element<'a, Message>,
    dialog: Option<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let Some(dialog) = dialog else {
        return base;
    };

    let backdrop = mouse_area(center(opaque(dialog)).style(styles::container::backdrop))
        .on_press(on_dismiss);

    Stack::new().push(base).push(opaque(backdrop)).into()
}
