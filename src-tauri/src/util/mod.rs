pub mod article_index;
pub mod breadcrumb;
pub mod highlight;
pub mod matcher;
pub mod snippet;
pub mod time_ago;
