//! Inline stroke icons.

use yew::prelude::*;

fn icon(size: u32, body: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { body }
        </svg>
    }
}

pub fn arrow_up_right(size: u32) -> Html {
    icon(size, html! {
        <>
            <path d="M7 7h10v10" />
            <path d="M7 17 17 7" />
        </>
    })
}

pub fn video(size: u32) -> Html {
    icon(size, html! {
        <>
            <path d="m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5" />
            <rect x="2" y="6" width="14" height="12" rx="2" />
        </>
    })
}

pub fn instagram(size: u32) -> Html {
    icon(size, html! {
        <>
            <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
            <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
        </>
    })
}

pub fn menu(size: u32) -> Html {
    icon(size, html! {
        <>
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="18" y2="18" />
        </>
    })
}

pub fn close(size: u32) -> Html {
    icon(size, html! {
        <>
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </>
    })
}
