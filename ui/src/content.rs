// Hand-authored page content. Array order is display order.

use crate::components::icon::IconKind;

macro_rules! asset {
    ($file:literal) => {
        concat!(
            "https://hoirqrkdgbmvpwutwuwj.supabase.co/storage/v1/object/public/assets/assets/",
            $file
        )
    };
}

pub const VENUE_NAME: &str = "DEJA VU";
pub const ADDRESS: &str = "1 Diamond St, Aberdeen AB10 1QX";
pub const ADDRESS_FULL: &str = "1 Diamond St, Aberdeen AB10 1QX, UK";

pub const MAP_EMBED_URL: &str =
    "https://www.google.com/maps?q=1%20Diamond%20St%2C%20Aberdeen%20AB10%201QX%2C%20UK&output=embed";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/dejavunightclub_/";
pub const INSTAGRAM_SHARE_URL: &str =
    "https://www.instagram.com/dejavunightclub_?igsh=MXBwOXVkcmR6anphdA==";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/share/18F89k5gqA/?mibextid=wwXIfr";

pub const HERO_IMAGE: &str = asset!("f2f61e32-f7d9-46ee-9655-df126da6fdd8_original.gif");

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub call_to_action: bool,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#", call_to_action: false },
    NavLink { label: "Social Events", href: "#portfolio", call_to_action: false },
    NavLink { label: "The Venue", href: "#studio", call_to_action: false },
    NavLink { label: "Become A Partner", href: "#contact", call_to_action: true },
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconKind,
    pub label: &'static str,
    pub href: &'static str,
    pub new_tab: bool,
}

/// Icons under the overlay menu. Facebook is a placeholder here, the footer
/// carries the real profile link.
pub const OVERLAY_SOCIAL: &[SocialLink] = &[
    SocialLink { icon: IconKind::Instagram, label: "Instagram", href: INSTAGRAM_URL, new_tab: true },
    SocialLink { icon: IconKind::Facebook, label: "Facebook", href: "#", new_tab: false },
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub image: &'static str,
    pub date: &'static str,
    pub tag: &'static str,
}

/// Caption row under a gallery image. Either side may be empty, not both.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Caption<'a> {
    pub date: &'a str,
    pub tag: &'a str,
}

impl GalleryItem {
    pub fn caption(&self) -> Option<Caption<'_>> {
        if self.date.is_empty() && self.tag.is_empty() {
            return None;
        }
        Some(Caption { date: self.date, tag: self.tag })
    }
}

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        image: asset!("d81b5e1c-a902-4feb-84f5-711fee587988_1600w.png"),
        date: "",
        tag: "DJ EVZ",
    },
    GalleryItem {
        image: asset!("1cd0d5c7-f136-4289-9928-3a5a20e5fd47_1600w.png"),
        date: "",
        tag: "",
    },
    GalleryItem {
        image: asset!("8d01d289-804d-47d7-913f-52bc6ab2d930_1600w.png"),
        date: "06/02/2026",
        tag: "OLD SCHOOL R&B CLASSICS",
    },
    GalleryItem {
        image: asset!("dcdaf5cb-c756-4491-ae10-3ee16fe225f7_original.gif"),
        date: "",
        tag: "",
    },
    GalleryItem {
        image: asset!("3e13d1e4-f661-4f89-b0d6-b002dc5b593d_800w.png"),
        date: "",
        tag: "DJ KULTUUR",
    },
    GalleryItem {
        image: asset!("10c91e34-672d-4d73-b8e2-e54abaa8531a_1600w.png"),
        date: "",
        tag: "",
    },
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        id: "01",
        title: "Afrobeat",
        description: "The rhythmic heart of the night, bringing authentic African energy to Aberdeen.",
    },
    ProcessStep {
        id: "02",
        title: "R&B Classics",
        description: "Smooth transitions into timeless tracks for a sophisticated crowd.",
    },
    ProcessStep {
        id: "03",
        title: "Amapiano",
        description: "The deepest house grooves from South Africa to keep the floor moving until dawn.",
    },
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VenueFeature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VENUE_FEATURES: &[VenueFeature] = &[
    VenueFeature {
        icon: IconKind::ShieldCheck,
        title: "Premium Security",
        description: "A safe, inclusive, and professional environment managed by experienced staff.",
    },
    VenueFeature {
        icon: IconKind::Star,
        title: "VIP Service",
        description: "Exclusive table service and premium offerings for an elevated celebration.",
    },
    VenueFeature {
        icon: IconKind::Music,
        title: "Crystal Audio",
        description: "State-of-the-art sound systems engineered for the best Afro-Carib beats.",
    },
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIAL: Testimonial = Testimonial {
    quote: "Excellent nightlife experience in the bustling Aberdeen city centre.",
    author: "Taiwo A",
};

#[cfg(test)]
mod tests {
    use super::*;

    const ASSET_BASE: &str = "https://hoirqrkdgbmvpwutwuwj.supabase.co/storage/v1/object/public/assets/assets/";

    #[test]
    fn empty_item_has_no_caption() {
        let item = GalleryItem { image: "x", date: "", tag: "" };
        assert_eq!(item.caption(), None);
    }

    #[test]
    fn caption_carries_only_what_is_set() {
        let tag_only = GalleryItem { image: "x", date: "", tag: "DJ EVZ" };
        assert_eq!(tag_only.caption(), Some(Caption { date: "", tag: "DJ EVZ" }));

        let date_only = GalleryItem { image: "x", date: "06/02/2026", tag: "" };
        assert_eq!(date_only.caption(), Some(Caption { date: "06/02/2026", tag: "" }));
    }

    #[test]
    fn gallery_captions_match_authored_data() {
        let captioned: Vec<_> = GALLERY.iter().filter_map(GalleryItem::caption).collect();
        assert_eq!(captioned.len(), 3);
        assert_eq!(captioned[1], Caption { date: "06/02/2026", tag: "OLD SCHOOL R&B CLASSICS" });
    }

    #[test]
    fn assets_are_absolute() {
        assert!(HERO_IMAGE.starts_with(ASSET_BASE));
        assert!(GALLERY.iter().all(|g| g.image.starts_with(ASSET_BASE)));
    }

    #[test]
    fn single_call_to_action() {
        let ctas: Vec<_> = NAV_LINKS.iter().filter(|l| l.call_to_action).collect();
        assert_eq!(ctas.len(), 1);
        assert_eq!(ctas[0].href, "#contact");
    }

    #[test]
    fn overlay_facebook_is_a_placeholder() {
        let facebook = OVERLAY_SOCIAL.iter().find(|l| l.icon == IconKind::Facebook).unwrap();
        assert_eq!(facebook.href, "#");
        assert!(!facebook.new_tab);

        let instagram = OVERLAY_SOCIAL.iter().find(|l| l.icon == IconKind::Instagram).unwrap();
        assert_eq!(instagram.href, INSTAGRAM_URL);
        assert!(instagram.new_tab);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        let ids: Vec<_> = PROCESS_STEPS.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["01", "02", "03"]);
    }
}
