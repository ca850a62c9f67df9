// Digits are decimal, least significant first. Every helper here works on raw slices; callers
// are responsible for normalizing the result.
pub const RADIX: u8 = 10;

pub fn add_to_digits(x: u8, digits: &mut [u8]) {
    let sum = digits[0] + x;
    if sum >= RADIX {
        digits[0] = sum - RADIX;
        add_to_digits(1, &mut digits[1..]);
    } else {
        digits[0] = sum;
    }
}

pub fn sub_from_digits(x: u8, digits: &mut [u8]) {
    if digits[0] < x {
        digits[0] = digits[0] + RADIX - x;
        sub_from_digits(1, &mut digits[1..]);
    } else {
        digits[0] -= x;
    }
}

pub fn add_assign_digits(target: &mut Vec<u8>, other: &[u8]) {
    let target_len = std::cmp::max(target.len(), other.len()) + 1;
    target.resize(target_len, 0);
    add_assign_digits_slice(&mut *target, other);
}

// Precondition: target is long enough to absorb the final carry.
pub fn add_assign_digits_slice(target: &mut [u8], other: &[u8]) {
    let mut carry = 0;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let sum = *target_digit + other_digit + carry;
        *target_digit = sum % RADIX;
        carry = sum / RADIX;
    }
    if carry != 0 {
        add_to_digits(carry, &mut target[other.len()..]);
    }
}

// Precondition: target >= other
pub fn sub_assign_digits(target: &mut [u8], other: &[u8]) {
    let mut borrow = 0;
    for (target_digit, &other_digit) in target.iter_mut().zip(other.iter()) {
        let subtrahend = other_digit + borrow;
        if *target_digit < subtrahend {
            *target_digit = *target_digit + RADIX - subtrahend;
            borrow = 1;
        } else {
            *target_digit -= subtrahend;
            borrow = 0;
        }
    }
    if borrow != 0 {
        sub_from_digits(1, &mut target[other.len()..]);
    }
}

// Multiplies a digit row by a single digit. The row is one digit longer than the input, the top
// digit holding whatever carry is left over.
pub fn mul_digits_by_digit(digits: &[u8], x: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(digits.len() + 1);
    let mut carry = 0;
    for &digit in digits {
        // At most 9 * 9 + 8, so a u8 never overflows.
        let value = digit * x + carry;
        out.push(value % RADIX);
        carry = value / RADIX;
    }
    out.push(carry);
    out
}
