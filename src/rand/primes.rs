//! Odd 64-bit primes used as state multipliers.

pub const PRIMES: [u64; 16] = [
    0x9600a35a099950d9,
    0x90c192cfd3ac94af,
    0x9e7769b10f4205b5,
    0xfebff20686734721,
    0xd7ee05cde00902c7,
    0xaa3af4d46b0a18e9,
    0xf341e07a83f73f17,
    0xb0cbc97d0fef7929,
    0xb908f227c59db917,
    0xf8e4b98d4787f93b,
    0xb192b70442594053,
    0xb91ee9e5efe09f07,
    0xe8c147437abec539,
    0xd5ab8b4d15b40aeb,
    0xf237e45acd02c5e1,
    0xb678bc8d40783f0b,
];
