pub mod configuration;

pub mod function {
    pub mod function;
    pub mod functionpoint;
    pub mod functions;

    pub mod basic {
        pub mod exp;
        pub mod log;
    }

    pub mod meta {
        pub mod composition;
        pub mod mult;
        pub mod power;
        pub mod scale;
        pub mod shift;
        pub mod sum;
    }
}

pub mod io {
    pub mod codecerror;
    pub mod binarycodec;
    pub mod jsoncodec;
    pub mod textcodec;
}

pub mod tabulated {
    pub mod tabulatedfunctionerror;
    pub mod tabulatedfunction;
    pub mod arraytabulatedfunction;
    pub mod linkedlisttabulatedfunction;
    pub mod storagekind;
    pub mod tabulatedfunctions;

    mod nodecache;
}
