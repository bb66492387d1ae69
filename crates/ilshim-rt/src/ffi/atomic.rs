use crate::atomic::{compare_exchange_raw, exchange_raw};

/// Defines `CompareExchange`/`Exchange` exports for one word type.
///
/// Every generated function requires `location` to be non-null, aligned for
/// the word type, and only accessed atomically by other threads.
macro_rules! interlocked {
    ($($t:ty => $cas:ident, $xchg:ident;)*) => {
        $(
            /// # Safety
            /// `location` must be valid, aligned, and accessed only atomically.
            #[no_mangle]
            pub unsafe extern "C" fn $cas(location: *mut $t, value: $t, comparand: $t) -> $t {
                compare_exchange_raw(location, value, comparand)
            }

            /// # Safety
            /// `location` must be valid, aligned, and accessed only atomically.
            #[no_mangle]
            pub unsafe extern "C" fn $xchg(location: *mut $t, value: $t) -> $t {
                exchange_raw(location, value)
            }
        )*

        symbol_table!(register => [$($cas, $xchg),*]);
    };
}

interlocked! {
    i32 => System_Threading_Interlocked_CompareExchange_ri32i32i32, System_Threading_Interlocked_Exchange_ri32i32;
    i64 => System_Threading_Interlocked_CompareExchange_ri64i64i64, System_Threading_Interlocked_Exchange_ri64i64;
    u32 => System_Threading_Interlocked_CompareExchange_ru32u32u32, System_Threading_Interlocked_Exchange_ru32u32;
    u64 => System_Threading_Interlocked_CompareExchange_ru64u64u64, System_Threading_Interlocked_Exchange_ru64u64;
    isize => System_Threading_Interlocked_CompareExchange_risisis, System_Threading_Interlocked_Exchange_risis;
    usize => System_Threading_Interlocked_CompareExchange_rususus, System_Threading_Interlocked_Exchange_rusus;
    *mut u8 => System_Threading_Interlocked_CompareExchange_rppp, System_Threading_Interlocked_Exchange_rpp;
}
