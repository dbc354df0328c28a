/// The variant field of a UUID, read from the top bits of
/// `clock_seq_hi_and_reserved`.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Variant {
    /// Apollo NCS backward compatibility.
    Ncs = 0,

    #[default]
    /// RFC 4122 / OSF DCE. The only variant the condensed form can carry.
    Rfc4122 = 4,

    /// Microsoft COM backward compatibility.
    Microsoft = 6,

    /// Reserved for future definition.
    Future = 7,
}
