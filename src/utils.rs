/// Returns whether bit `bit` of `num` is set.
///
/// ```text
/// bit_on(0b1010, 1) == true
/// bit_on(0b1010, 2) == false
/// ```
pub fn bit_on(num: u64, bit: u32) -> bool {
    (num >> bit) & 1 == 1
}
