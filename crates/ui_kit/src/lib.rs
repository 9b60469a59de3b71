//! Presentational component library for web applications.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the stylesheet layer. The one stateful family is [`Tabs`]: a tab group whose active identity
//! lives in a headless [`tab_core::TabController`], optionally mirrored into a URL query
//! parameter, and exposed to descendant [`TabPanel`]s through [`TabsContext`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;
mod tabs;

pub use primitives::{
    Avatar, AvatarSize, Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, Elevation,
    LayoutGap, MenuItem, MenuSeparator, MenuSurface, Skeleton, SkeletonShape, Stack, TextField,
    TextTone,
};
pub use tab_core::{TabDescriptor, TabIdentity, TabsError};
pub use tabs::{expect_tabs_context, try_tabs_context, Tab, TabList, TabPanel, Tabs, TabsContext};

/// Convenience imports for application crates consuming the shared component set.
pub mod prelude {
    pub use crate::{
        expect_tabs_context, Avatar, AvatarSize, Badge, Button, ButtonSize, ButtonVariant, Card,
        Cluster, Elevation, LayoutGap, MenuItem, MenuSeparator, MenuSurface, Skeleton,
        SkeletonShape, Stack, Tab, TabDescriptor, TabIdentity, TabList, TabPanel, Tabs,
        TabsContext, TextField, TextTone,
    };
}
