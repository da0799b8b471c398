mod eip1559;
mod eip2930;
mod legacy;

pub use self::{eip1559::Eip1559, eip2930::Eip2930, legacy::Legacy};
