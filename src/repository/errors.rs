#[derive(Debug, PartialEq)]
pub enum FindError {
    NotFound,
    Unknown,
}

impl From<std::io::Error> for FindError {
    fn from(value: std::io::Error) -> Self {
        log::error!("occurred an error reading a funnel config: {}", value);
        match value.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::Unknown,
        }
    }
}

impl From<serde_json::Error> for FindError {
    fn from(value: serde_json::Error) -> Self {
        log::error!("occurred an error parsing a funnel config: {}", value);
        Self::Unknown
    }
}

#[derive(Debug, PartialEq)]
pub enum FindAllError {
    Unknown,
}

impl From<std::io::Error> for FindAllError {
    fn from(value: std::io::Error) -> Self {
        log::error!("occurred an error listing funnel configs: {}", value);
        Self::Unknown
    }
}
