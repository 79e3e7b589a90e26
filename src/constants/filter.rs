/// Topic-listing modes the filtered favorites endpoints expose.
///
/// The host forum knows more filters than these, but this is the fixed set
/// the service routes; anything else on the path is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListFilter {
    Latest,
    Unread,
    New,
    Top,
    Hot,
}

impl ListFilter {
    pub const ALL: [ListFilter; 5] = [
        ListFilter::Latest,
        ListFilter::Unread,
        ListFilter::New,
        ListFilter::Top,
        ListFilter::Hot,
    ];

    pub fn from_param(param: &str) -> Option<ListFilter> {
        match param {
            "latest" => Some(ListFilter::Latest),
            "unread" => Some(ListFilter::Unread),
            "new" => Some(ListFilter::New),
            "top" => Some(ListFilter::Top),
            "hot" => Some(ListFilter::Hot),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListFilter::Latest => "latest",
            ListFilter::Unread => "unread",
            ListFilter::New => "new",
            ListFilter::Top => "top",
            ListFilter::Hot => "hot",
        }
    }
}
